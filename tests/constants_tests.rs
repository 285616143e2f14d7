// Host-side tests for DOM wiring constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn canvas_is_exposed_as_progressbar() {
    assert_eq!(ROLE_ATTR, "role");
    assert_eq!(PROGRESSBAR_ROLE, "progressbar");
    assert_eq!(ARIA_VALUETEXT_ATTR, "aria-valuetext");
}

#[test]
fn option_keys_match_js_naming() {
    assert_eq!(OPTION_COLOR, "color");
    assert_eq!(OPTION_ARIA_VALUE_TEXT, "ariaValueText");
    // camelCase keys, no separators
    assert!(!OPTION_ARIA_VALUE_TEXT.contains(['-', '_']));
}

#[test]
fn rendering_targets_2d_canvas() {
    assert_eq!(CANVAS_TAG, "canvas");
    assert_eq!(CONTEXT_ID, "2d");
    assert!(LOG_LEVEL <= log::Level::Info);
}
