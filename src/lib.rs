#![cfg(target_arch = "wasm32")]
//! Browser front-end: mounts a grooove on a `<canvas>` and animates it with
//! `requestAnimationFrame`.

use grooove_core::{AnimationParams, Grooove, SingleUseGate};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod options;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    Ok(())
}

/// Start a grooove of `width`×`height` pixels inside `root`.
///
/// `options` may be `undefined` or `{color: "#RRGGBB", ariaValueText: string}`.
/// Returns a function which stops the animation and removes the canvas; calls after
/// the first one do nothing.
#[wasm_bindgen(js_name = startGrooove)]
pub fn start_grooove(
    width: u32,
    height: u32,
    root: &web::Node,
    options: JsValue,
) -> Result<js_sys::Function, JsValue> {
    mount(width, height, root, &options).map_err(|e| {
        log::error!("startGrooove: {:#}", e);
        js_sys::Error::new(&e.to_string()).into()
    })
}

fn mount(
    width: u32,
    height: u32,
    root: &web::Node,
    options: &JsValue,
) -> anyhow::Result<js_sys::Function> {
    let options = options::read(options)?.normalize()?;
    let grooove = Grooove::new(
        width as f64,
        height as f64,
        &options,
        &AnimationParams::default(),
    )?;

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::create_canvas(&document, width, height)?;
    let context = dom::context_2d(&canvas)?;
    dom::mark_as_progressbar(&canvas, &options.aria_value_text);

    let surface = surface::CanvasSurface::new(context, canvas.clone(), root.clone());
    let handle = frame::start_loop(grooove, surface)?;
    if let Err(e) = root.append_child(&canvas) {
        handle.stop();
        return Err(dom::js_err(e));
    }
    Ok(stop_function(handle))
}

/// Wrap the loop handle in a single-use JS function. After the first call the
/// handle, and with it the canvas and root, is no longer referenced.
fn stop_function(handle: frame::LoopHandle) -> js_sys::Function {
    let mut gate = SingleUseGate::new(move || handle.stop());
    let closure = Closure::wrap(Box::new(move || {
        gate.call();
    }) as Box<dyn FnMut()>);
    closure.into_js_value().unchecked_into()
}
