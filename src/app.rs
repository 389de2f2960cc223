//! The animation loop: render every drawable, then advance every drawable.

use web_time::Instant;

use crate::{
    core::Scene,
    error::Result,
    options::Options,
    renderers::ForwardRenderer,
    wgpual::{Gpu, GpuOptions},
};

/// Whether a surface error ends the animation. Hosts stop re-arming the loop
/// once [`App::tick`] reports one.
pub fn is_fatal(error: &wgpu::SurfaceError) -> bool {
    matches!(error, wgpu::SurfaceError::OutOfMemory)
}

/// Everything one running animation needs: the renderer with its projection
/// and shader pipeline, the drawables and the clock they are driven by.
///
/// The host only has to call [`frame`](Self::frame) once per repaint.
pub struct App<'window> {
    renderer: ForwardRenderer<'window>,
    scene: Scene,
    clock: Instant,
}

impl<'window> App<'window> {
    /// Sets up the GPU on `target`, builds the pipeline and uploads every
    /// drawable named in `options`.
    ///
    /// # Errors
    ///
    /// Any setup failure. None of them are recoverable.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'window>>,
        options: &Options,
    ) -> Result<Self> {
        options.validate()?;

        let gpu = Gpu::new(
            target,
            GpuOptions {
                power_preference: options.power_preference.into(),
                size: (options.width, options.height),
            },
        )
        .await?;

        let perspective = options.perspective(gpu.aspect());
        let renderer =
            ForwardRenderer::new(gpu, perspective, options.wgpu_clear_color()).await?;

        let clock = Instant::now();

        let drawables = options
            .objects
            .iter()
            .map(|placement| renderer.create_drawable(placement, options, 0.0))
            .collect::<Result<Vec<_>>>()?;

        log::info!("{} drawables ready", drawables.len());

        Ok(Self {
            renderer,
            scene: Scene::new(drawables),
            clock,
        })
    }

    /// Milliseconds since the app was created.
    pub fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    /// Runs one tick against the wall clock.
    ///
    /// # Errors
    ///
    /// See [`tick`](Self::tick).
    pub fn frame(&mut self) -> Result<()> {
        let now_ms = self.now_ms();
        self.tick(now_ms)
    }

    /// Draws the current state, then updates every drawable to `now_ms`.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    ///
    /// # Errors
    ///
    /// [`Error::Surface`](crate::Error::Surface) when the device is out of
    /// memory.
    pub fn tick(&mut self, now_ms: f64) -> Result<()> {
        match self.renderer.render(&self.scene.drawables) {
            Ok(()) => {}
            Err(error) if is_fatal(&error) => return Err(error.into()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost or outdated, reconfiguring");
                self.renderer.state.reconfigure();
            }
            Err(error) => log::warn!("skipping frame: {error}"),
        }

        self.scene.update(now_ms);

        Ok(())
    }

    /// Follows a resize of the window or canvas.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.set_size(width, height);
    }

    /// The drawables, in draw order.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
