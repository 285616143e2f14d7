// Browser tests for mounting, option handling and stopping.
// Run with `wasm-pack test --headless --firefox`; host builds skip this file.

#![cfg(target_arch = "wasm32")]

use grooove_web::start_grooove;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root() -> web::Element {
    let document = web::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn options_with(key: &str, value: JsValue) -> JsValue {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &JsValue::from_str(key), &value).unwrap();
    obj.into()
}

fn aria_text_of(root: &web::Element) -> Option<String> {
    root.first_element_child()
        .and_then(|canvas| canvas.get_attribute("aria-valuetext"))
}

#[wasm_bindgen_test]
fn defaults_mount_an_accessible_canvas() {
    let root = mount_root();
    let stop = start_grooove(200, 40, &root, JsValue::UNDEFINED).unwrap();
    let canvas = root.first_element_child().unwrap();
    assert_eq!(canvas.tag_name().to_lowercase(), "canvas");
    assert_eq!(canvas.get_attribute("role").as_deref(), Some("progressbar"));
    assert_eq!(aria_text_of(&root).as_deref(), Some("busy"));
    stop.call0(&JsValue::NULL).unwrap();
}

#[wasm_bindgen_test]
fn numeric_aria_value_text_is_stringified() {
    let root = mount_root();
    let stop = start_grooove(
        200,
        40,
        &root,
        options_with("ariaValueText", JsValue::from_f64(50.0)),
    )
    .unwrap();
    assert_eq!(aria_text_of(&root).as_deref(), Some("50"));
    stop.call0(&JsValue::NULL).unwrap();
}

#[wasm_bindgen_test]
fn null_aria_value_text_is_kept_as_text() {
    let root = mount_root();
    let stop = start_grooove(200, 40, &root, options_with("ariaValueText", JsValue::NULL)).unwrap();
    assert_eq!(aria_text_of(&root).as_deref(), Some("null"));
    stop.call0(&JsValue::NULL).unwrap();
}

#[wasm_bindgen_test]
fn invalid_color_throws_and_leaves_root_empty() {
    let root = mount_root();
    let result = start_grooove(200, 40, &root, options_with("color", JsValue::from_str("red")));
    assert!(result.is_err());
    assert_eq!(root.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn stop_detaches_canvas_and_second_call_is_ignored() {
    let root = mount_root();
    let stop = start_grooove(200, 40, &root, JsValue::UNDEFINED).unwrap();
    assert_eq!(root.child_element_count(), 1);
    stop.call0(&JsValue::NULL).unwrap();
    assert_eq!(root.child_element_count(), 0);
    stop.call0(&JsValue::NULL).unwrap();
    assert_eq!(root.child_element_count(), 0);
}
