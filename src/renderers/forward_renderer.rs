use glam::Mat4;
use wgpu::util::DeviceExt;

use super::ShaderPipeline;
use crate::{
    core::{Drawable, Perspective, Placement},
    error::Result,
    options::Options,
    wgpual::Gpu,
};

/// Device resident data of one [`Drawable`]. Geometry buffers are uploaded
/// once with static usage, only the model matrix is rewritten per frame.
pub struct DrawableBuffers {
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    model_view_matrix_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Forward renderer.
///
/// The forward renderer renders each drawable in a separate draw call, binding
/// its buffers again every time.
pub struct ForwardRenderer<'window> {
    /// Contains various GPU objects used by this renderer.
    pub state: Gpu<'window>,
    /// The clear color to use for the clear operation.
    pub clear_color: wgpu::Color,
    /// The projection matrix, computed once at startup.
    pub projection_matrix: Mat4,

    shader: ShaderPipeline,
    projection_matrix_buffer: wgpu::Buffer,
    depth_texture: wgpu::Texture,
}

impl<'window> ForwardRenderer<'window> {
    /// Creates a new forward renderer on top of an initialised GPU.
    ///
    /// * `state`: The device and surface to draw with.
    /// * `perspective`: Projection used for every frame.
    /// * `clear_color`: Background color.
    ///
    /// # Errors
    ///
    /// [`Error::Shader`](crate::Error::Shader) if the shader pipeline fails to
    /// build.
    pub async fn new(
        state: Gpu<'window>,
        perspective: Perspective,
        clear_color: wgpu::Color,
    ) -> Result<Self> {
        let shader =
            ShaderPipeline::new(&state.device, state.surface_configuration.format).await?;

        let projection_matrix = perspective.matrix();

        let projection_matrix_buffer =
            state
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Projection matrix buffer"),
                    contents: bytemuck::bytes_of(&projection_matrix),
                    usage: wgpu::BufferUsages::UNIFORM.union(wgpu::BufferUsages::COPY_DST),
                });

        let depth_texture = Self::create_depth_texture(&state.device, state.size);

        Ok(Self {
            state,
            clear_color,
            projection_matrix,
            shader,
            projection_matrix_buffer,
            depth_texture,
        })
    }

    fn create_depth_texture(device: &wgpu::Device, (width, height): (u32, u32)) -> wgpu::Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: ShaderPipeline::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
    }

    /// Reconfigures the renderer to render to the specified size. Note that
    /// this does not resize the window, and the projection is left as it was.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.state.set_size(width, height);
            self.depth_texture = Self::create_depth_texture(&self.state.device, self.state.size);
        }
    }

    /// Builds the drawable described by `placement` and uploads its buffers
    /// right away.
    ///
    /// # Errors
    ///
    /// [`Error::Geometry`](crate::Error::Geometry) if the shape's buffers are
    /// inconsistent.
    pub fn create_drawable(
        &self,
        placement: &Placement,
        options: &Options,
        now_ms: f64,
    ) -> Result<Drawable> {
        let drawable = Drawable::from_placement(placement, options, now_ms)?;
        self.prepare(&drawable);
        Ok(drawable)
    }

    /// Returns the device buffers of `drawable`, uploading them first if this
    /// is the first time the renderer sees it.
    pub fn prepare<'d>(&self, drawable: &'d Drawable) -> &'d DrawableBuffers {
        drawable.buffers.get_or_init(|| self.upload(drawable))
    }

    fn upload(&self, drawable: &Drawable) -> DrawableBuffers {
        let device = &self.state.device;
        let geometry = &drawable.geometry;

        log::debug!(
            "uploading {}: {} vertices, {} triangles",
            drawable.label,
            geometry.vertex_count(),
            geometry.triangle_count()
        );

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} position buffer", drawable.label)),
            contents: bytemuck::cast_slice(&geometry.position),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} color buffer", drawable.label)),
            contents: bytemuck::cast_slice(&geometry.color),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} index buffer", drawable.label)),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let model_view_matrix_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} model view matrix buffer", drawable.label)),
                contents: bytemuck::bytes_of(&drawable.model_matrix),
                usage: wgpu::BufferUsages::UNIFORM.union(wgpu::BufferUsages::COPY_DST),
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} bind group", drawable.label)),
            layout: &self.shader.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: ShaderPipeline::PROJECTION_BINDING,
                    resource: self.projection_matrix_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: ShaderPipeline::MODEL_VIEW_BINDING,
                    resource: model_view_matrix_buffer.as_entire_binding(),
                },
            ],
        });

        DrawableBuffers {
            position_buffer,
            color_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
            model_view_matrix_buffer,
            bind_group,
        }
    }

    /// Renders the specified drawables, in order, to the surface.
    pub fn render(&mut self, drawables: &[Drawable]) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.state.surface.get_current_texture()?;
        let texture_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let depth_view = self
            .depth_texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.state.queue.write_buffer(
            &self.projection_matrix_buffer,
            0,
            bytemuck::bytes_of(&self.projection_matrix),
        );

        let prepared: Vec<&DrawableBuffers> = drawables
            .iter()
            .map(|drawable| {
                let buffers = self.prepare(drawable);

                self.state.queue.write_buffer(
                    &buffers.model_view_matrix_buffer,
                    0,
                    bytemuck::bytes_of(&drawable.model_matrix),
                );

                buffers
            })
            .collect();

        let mut encoder = self
            .state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor::default());

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Forward render pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &texture_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(&self.shader.pipeline);

        for buffers in prepared {
            render_pass.set_vertex_buffer(0, buffers.position_buffer.slice(..));
            render_pass.set_vertex_buffer(1, buffers.color_buffer.slice(..));
            render_pass.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.set_bind_group(0, &buffers.bind_group, &[]);
            render_pass.draw_indexed(0..buffers.index_count, 0, 0..1);
        }

        drop(render_pass);

        self.state.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
