use crate::constants::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn create_canvas(
    document: &web::Document,
    width: u32,
    height: u32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element(CANVAS_TAG)
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

/// 2D context with an alpha channel, so the page shows through between circles.
pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let attrs = js_sys::Object::new();
    js_sys::Reflect::set(&attrs, &JsValue::from_str("alpha"), &JsValue::TRUE).map_err(js_err)?;
    canvas
        .get_context_with_context_options(CONTEXT_ID, &attrs)
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn mark_as_progressbar(canvas: &web::HtmlCanvasElement, aria_value_text: &str) {
    _ = canvas.set_attribute(ROLE_ATTR, PROGRESSBAR_ROLE);
    _ = canvas.set_attribute(ARIA_VALUETEXT_ATTR, aria_value_text);
}
