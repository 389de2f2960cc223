/// Generator of common geometry buffers such as vertices and indices. Should be
/// implemented on all geometry parameter structs.
///
/// There is an emphasis on the word "generator": the methods will create new
/// arrays of data every time they are invoked. To store the data, use
/// [`BufferGeometry::from_geometry`](super::BufferGeometry::from_geometry).
pub trait Geometry {
    /// Generates the position buffer. Every consecutive triplet is one vertex.
    fn vertices(&self) -> Vec<f32>;
    /// Generates the color buffer. Every consecutive quadruple is the RGBA
    /// color of the corresponding vertex.
    fn colors(&self) -> Vec<f32>;
    /// Generates the triangle list indices into the vertex buffer.
    fn indices(&self) -> Vec<u16>;
}
