//! Desktop host: a `winit` window that redraws continuously.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    app::App,
    error::{Error, Result},
    options::Options,
};

struct Host {
    options: Options,
    window: Option<Arc<Window>>,
    app: Option<App<'static>>,
    error: Option<Error>,
}

impl Host {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("polyspin")
            .with_inner_size(PhysicalSize::new(self.options.width, self.options.height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(error) => return self.fail(event_loop, Error::Host(error.to_string())),
        };

        let size = window.inner_size();
        let options = Options {
            width: size.width.max(1),
            height: size.height.max(1),
            ..self.options.clone()
        };

        match pollster::block_on(App::new(Arc::clone(&window), &options)) {
            Ok(app) => self.app = Some(app),
            Err(error) => return self.fail(event_loop, error),
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(app) = &mut self.app {
                    app.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let (Some(window), Some(app)) = (&self.window, &mut self.app) else {
                    return;
                };

                // Re-arm before drawing so the loop never stalls.
                window.request_redraw();

                if let Err(error) = app.frame() {
                    self.fail(event_loop, error);
                }
            }
            _ => {}
        }
    }
}

/// Opens a window and animates the drawables in `options` until it is
/// closed.
///
/// # Errors
///
/// Event loop failures and every fatal setup error of [`App::new`].
pub fn run(options: Options) -> Result<()> {
    options.validate()?;

    let event_loop = EventLoop::new().map_err(|e| Error::Host(e.to_string()))?;

    let mut host = Host {
        options,
        window: None,
        app: None,
        error: None,
    };

    event_loop
        .run_app(&mut host)
        .map_err(|e| Error::Host(e.to_string()))?;

    match host.error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
