use crate::error::{Error, Result};

/// Container for several GPU objects used by renderers.
pub struct Gpu<'window> {
    /// The WGPU surface.
    pub surface: wgpu::Surface<'window>,
    /// The WGPU device.
    pub device: wgpu::Device,
    /// The WGPU queue.
    pub queue: wgpu::Queue,
    /// The WGPU surface configuration.
    pub surface_configuration: wgpu::SurfaceConfiguration,
    /// The size of the surface in physical pixels.
    pub size: (u32, u32),
}

/// Parameters for when creating a new GPU adapter.
pub struct GpuOptions {
    /// Provides a **hint** to indicate which GPU to use. `LowPower` means to
    /// use an integrated GPU, while `HighPower` means to use a dedicated GPU.
    /// Default is `None` (provides no hint).
    pub power_preference: wgpu::PowerPreference,
    /// Initial size of the surface in physical pixels.
    pub size: (u32, u32),
}

/// Picks a non-sRGB surface format so authored colors are stored unchanged,
/// falling back to whatever the surface offers first.
pub fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .find(|format| !format.is_srgb())
        .or_else(|| formats.first())
        .copied()
}

/// Picks how the surface composites with what is behind it. In a page the
/// canvas is premultiplied, so translucent pixels show the page through.
pub fn pick_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    prefer_premultiplied: bool,
) -> wgpu::CompositeAlphaMode {
    if prefer_premultiplied && modes.contains(&wgpu::CompositeAlphaMode::PreMultiplied) {
        return wgpu::CompositeAlphaMode::PreMultiplied;
    }

    modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

impl<'window> Gpu<'window> {
    /// Creates a new GPU object with the specified options.
    ///
    /// * `target`: Window or canvas to render on.
    /// * `options`: Configuration for the new device.
    ///
    /// # Errors
    ///
    /// [`Error::CreateSurface`] when the target cannot host a surface,
    /// [`Error::AdapterUnavailable`] when no adapter fits the surface and
    /// [`Error::RequestDevice`] when the adapter refuses a device.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'window>>,
        options: GpuOptions,
    ) -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(target)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: options.power_preference,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or(Error::AdapterUnavailable)?;

        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("polyspin device"),
                    required_features: wgpu::Features::empty(),
                    // WebGL2 is the lowest common denominator in browsers.
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);

        let surface_format = pick_surface_format(&surface_capabilities.formats)
            .ok_or(Error::AdapterUnavailable)?;

        let size = (options.size.0.max(1), options.size.1.max(1));

        let surface_configuration = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.0,
            height: size.1,
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: pick_alpha_mode(
                &surface_capabilities.alpha_modes,
                cfg!(target_arch = "wasm32"),
            ),
            view_formats: vec![],
        };

        surface.configure(&device, &surface_configuration);

        Ok(Gpu {
            surface,
            device,
            queue,
            surface_configuration,
            size,
        })
    }

    /// Reconfigures the surface to the specified width and height. Note that
    /// this does not resize the surface, and should be called after the surface
    /// has been resized.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size.0 = width;
            self.size.1 = height;
            self.surface_configuration.width = width;
            self.surface_configuration.height = height;
            self.reconfigure();
        }
    }

    /// Applies the current surface configuration again, e.g. after the
    /// surface was lost.
    pub fn reconfigure(&self) {
        self.surface
            .configure(&self.device, &self.surface_configuration);
    }

    /// Aspect ratio (width over height) of the surface.
    pub fn aspect(&self) -> f32 {
        self.size.0 as f32 / self.size.1 as f32
    }
}
