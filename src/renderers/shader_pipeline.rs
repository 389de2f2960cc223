use std::mem::size_of;

use glam::Mat4;
use wgpu::{include_wgsl, VertexAttribute};

use crate::{
    error::{Error, Result},
    geometries::BufferGeometry,
};

/// The single vertex/fragment program used by the
/// [`ForwardRenderer`](super::ForwardRenderer), together with the resolved
/// locations of its inputs.
pub struct ShaderPipeline {
    /// The linked render pipeline.
    pub pipeline: wgpu::RenderPipeline,
    /// Layout of the per-drawable bind group holding both matrices.
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl ShaderPipeline {
    /// Shader location of the vertex position attribute.
    pub const POSITION_LOCATION: u32 = 0;
    /// Shader location of the vertex color attribute.
    pub const COLOR_LOCATION: u32 = 1;
    /// Binding of the projection matrix uniform in group 0.
    pub const PROJECTION_BINDING: u32 = 0;
    /// Binding of the model-view matrix uniform in group 0.
    pub const MODEL_VIEW_BINDING: u32 = 1;
    /// Size of one matrix uniform.
    pub const MATRIX_SIZE: u64 = size_of::<Mat4>() as u64;
    /// Format of the depth attachment the pipeline tests against.
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

    /// Compiles the shaders and links the pipeline for the given color target
    /// format.
    ///
    /// # Errors
    ///
    /// [`Error::Shader`] with the validation message if compilation or
    /// linking fails.
    pub async fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Result<Self> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Matrices bind group layout"),
            entries: &[
                // Projection matrix
                Self::matrix_layout_entry(Self::PROJECTION_BINDING),
                // Model-view matrix
                Self::matrix_layout_entry(Self::MODEL_VIEW_BINDING),
            ],
        });

        let position_buffer_layout = wgpu::VertexBufferLayout {
            array_stride: (BufferGeometry::POSITION_SIZE * size_of::<f32>()) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: Self::POSITION_LOCATION,
            }],
        };

        let color_buffer_layout = wgpu::VertexBufferLayout {
            array_stride: (BufferGeometry::COLOR_SIZE * size_of::<f32>()) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 0,
                shader_location: Self::COLOR_LOCATION,
            }],
        };

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Forward renderer pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let module = device.create_shader_module(include_wgsl!("shaders/forward_renderer.wgsl"));

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Forward renderer pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: "vertexMain",
                compilation_options: Default::default(),
                buffers: &[position_buffer_layout, color_buffer_layout],
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: "fragmentMain",
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // Face windings in the solids are not consistent.
                cull_mode: None,
                strip_index_format: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: Self::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(error) = device.pop_error_scope().await {
            return Err(Error::Shader(error.to_string()));
        }

        log::info!("shader pipeline linked for {format:?}");

        Ok(Self {
            pipeline,
            bind_group_layout,
        })
    }

    fn matrix_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(Self::MATRIX_SIZE),
            },
            count: None,
        }
    }
}
