use crate::constants::{OPTION_ARIA_VALUE_TEXT, OPTION_COLOR};
use crate::dom::js_err;
use grooove_core::{GroooveError, RawOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The global `String(value)` conversion.
    #[wasm_bindgen(js_name = String, catch)]
    fn js_string(value: &JsValue) -> Result<String, JsValue>;
}

/// Read the optional JS options object (`{color, ariaValueText}`).
/// `undefined`/`null` and missing keys fall back to defaults during normalization.
pub fn read(options: &JsValue) -> anyhow::Result<RawOptions> {
    if options.is_undefined() || options.is_null() {
        return Ok(RawOptions::default());
    }
    let color = match field(options, OPTION_COLOR)? {
        Some(value) => Some(
            value
                .as_string()
                .ok_or_else(|| GroooveError::InvalidColor(format!("{:?}", value)))?,
        ),
        None => None,
    };
    // Any value other than `undefined` is used as the attribute text, `null` included.
    let aria_value_text = match field(options, OPTION_ARIA_VALUE_TEXT)? {
        Some(value) => Some(match value.as_string() {
            Some(text) => text,
            None => js_string(&value).map_err(js_err)?,
        }),
        None => None,
    };
    Ok(RawOptions {
        color,
        aria_value_text,
    })
}

fn field(options: &JsValue, key: &str) -> anyhow::Result<Option<JsValue>> {
    let value = js_sys::Reflect::get(options, &JsValue::from_str(key)).map_err(js_err)?;
    Ok((!value.is_undefined()).then_some(value))
}
