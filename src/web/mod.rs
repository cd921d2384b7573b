//! Browser glue: a full-window canvas, pointer and resize listeners, and `requestAnimationFrame`.

mod canvas;
mod logger;

use anyhow::{anyhow, Context};
use wasm_bindgen::{prelude::*, JsCast};

use crate::animation::{self, CancelToken, Scheduler};
use crate::config::SceneConfig;
use crate::pointer::Pointer;
use crate::scene::Scene;
use crate::vector::Vec2;

use self::canvas::Canvas;

/// A running animation. Dropping it does not stop it; call `stop`.
#[wasm_bindgen]
pub struct Animation {
    token: CancelToken,
}

#[wasm_bindgen]
impl Animation {
    pub fn stop(&self) {
        self.token.cancel();
    }
}

/// Start animating on the canvas with id `canvas_id`, with the reference look.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<Animation, JsValue> {
    init();
    setup(canvas_id, SceneConfig::default()).map_err(to_js)
}

/// Like `start`, with a JSON scene configuration. Missing fields take their defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(canvas_id: &str, config: &str) -> Result<Animation, JsValue> {
    init();
    SceneConfig::from_json(config)
        .and_then(|config| setup(canvas_id, config))
        .map_err(to_js)
}

fn init() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    logger::init(log::LevelFilter::Info);
}

fn setup(canvas_id: &str, config: SceneConfig) -> anyhow::Result<Animation> {
    let window = web_sys::window().context("`window` not found.")?;
    let document = window
        .document()
        .context("`window.document` not found.")?;

    let element: web_sys::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .with_context(|| format!("No element with id `{canvas_id}`."))?
        .dyn_into()
        .map_err(|_| anyhow!("`#{canvas_id}` is not a canvas."))?;
    let context: web_sys::CanvasRenderingContext2d = element
        .get_context("2d")
        .map_err(from_js)?
        .context("The canvas has no 2D context.")?
        .dyn_into()
        .map_err(|_| anyhow!("The canvas's 2D context has an unexpected type."))?;

    fit_to_window(&window, &element)?;

    let closure: Closure<dyn Fn()> = {
        let window = window.clone();
        let element = element.clone();
        Closure::new(move || {
            if let Err(e) = fit_to_window(&window, &element) {
                log::warn!("{e:#}");
            }
        })
    };
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(from_js)?;
    closure.forget();

    let mut scene = Scene::new(element.width().into(), element.height().into(), config);
    let pointer = Pointer::new(scene.center());

    let closure: Closure<dyn Fn(web_sys::MouseEvent)> = {
        let pointer = pointer.clone();
        Closure::new(move |e: web_sys::MouseEvent| {
            pointer.set(Vec2::new(e.client_x().into(), e.client_y().into()))
        })
    };
    element
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
        .map_err(from_js)?;
    closure.forget();

    log::info!(
        "Animating on `#{canvas_id}` ({}x{}).",
        element.width(),
        element.height()
    );

    let mut surface = Canvas::new(element, context);
    let token = CancelToken::new();
    animation::run(
        move || scene.frame(pointer.get(), &mut surface),
        AnimationFrames { window },
        token.clone(),
    );

    Ok(Animation { token })
}

fn fit_to_window(
    window: &web_sys::Window,
    element: &web_sys::HtmlCanvasElement,
) -> anyhow::Result<()> {
    let width = window.inner_width().map_err(from_js)?.as_f64();
    let height = window.inner_height().map_err(from_js)?.as_f64();
    let (Some(width), Some(height)) = (width, height) else {
        return Err(anyhow!("The window size is not a number."));
    };
    element.set_width(width as u32);
    element.set_height(height as u32);
    Ok(())
}

/// `window.requestAnimationFrame`.
struct AnimationFrames {
    window: web_sys::Window,
}

impl Scheduler for AnimationFrames {
    fn request_frame(&self, frame: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || frame());
        if let Err(e) = self
            .window
            .request_animation_frame(callback.unchecked_ref::<js_sys::Function>())
        {
            log::error!("Could not schedule the next frame: {e:?}");
        }
    }
}

fn from_js(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}
