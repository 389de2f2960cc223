//! Browser host: draws into a canvas and re-arms with
//! `requestAnimationFrame`.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::HtmlCanvasElement;

use crate::{
    app::App,
    error::{Error, Result},
    options::Options,
};

/// Id of the canvas the animation draws into. Created if the page has none.
pub const CANVAS_ID: &str = "polyspin-canvas";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Entry point run when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(error) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&error.to_string().into());
    }

    wasm_bindgen_futures::spawn_local(async {
        if let Err(error) = run(Options::default()).await {
            fatal(&error);
        }
    });
}

fn host_error(value: JsValue) -> Error {
    Error::Host(format!("{value:?}"))
}

/// Reports an unrecoverable error to the user.
fn fatal(error: &Error) {
    log::error!("{error}");

    if let Some(window) = web_sys::window() {
        // Nothing left to report to if even the alert fails.
        let _ = window.alert_with_message(&error.to_string());
    }
}

fn canvas(options: &Options) -> Result<HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Host("no document".to_owned()))?;

    if let Some(element) = document.get_element_by_id(CANVAS_ID) {
        return element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::Host(format!("#{CANVAS_ID} is not a canvas")));
    }

    let canvas = document
        .create_element("canvas")
        .map_err(host_error)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::Host("created element is not a canvas".to_owned()))?;
    canvas.set_id(CANVAS_ID);
    canvas.set_width(options.width);
    canvas.set_height(options.height);

    document
        .body()
        .ok_or_else(|| Error::Host("document has no body".to_owned()))?
        .append_child(&canvas)
        .map_err(host_error)?;

    Ok(canvas)
}

/// Schedules `callback` for the next repaint and returns the request id.
fn request_animation_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = callback.borrow();
    let closure = callback.as_ref()?;

    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(error) => {
            log::error!("requestAnimationFrame failed: {error:?}");
            None
        }
    }
}

fn cancel_animation_frame(id: i32) {
    if let Some(window) = web_sys::window() {
        if let Err(error) = window.cancel_animation_frame(id) {
            log::error!("cancelAnimationFrame failed: {error:?}");
        }
    }
}

async fn run(options: Options) -> Result<()> {
    let canvas = canvas(&options)?;

    // The canvas decides the aspect ratio, as in the page's layout.
    let options = Options {
        width: canvas.width().max(1),
        height: canvas.height().max(1),
        ..options
    };

    let app = App::new(wgpu::SurfaceTarget::Canvas(canvas), &options).await?;
    let app = Rc::new(RefCell::new(app));

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let rearm = Rc::clone(&callback);

    *callback.borrow_mut() = Some(Closure::new(move || {
        let next = request_animation_frame(&rearm);

        // A failed frame is fatal: report it once and stop the loop.
        if let Err(error) = app.borrow_mut().frame() {
            if let Some(id) = next {
                cancel_animation_frame(id);
            }
            fatal(&error);
        }
    }));

    request_animation_frame(&callback);

    Ok(())
}
