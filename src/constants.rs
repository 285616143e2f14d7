// DOM wiring constants for the canvas front-end.

pub const CANVAS_TAG: &str = "canvas";
pub const CONTEXT_ID: &str = "2d";

// Assistive technologies see the canvas as a progress bar with a textual value.
// See https://www.w3.org/TR/wai-aria-1.1/#progressbar
pub const ROLE_ATTR: &str = "role";
pub const PROGRESSBAR_ROLE: &str = "progressbar";
pub const ARIA_VALUETEXT_ATTR: &str = "aria-valuetext";

// Keys read from the JS options object.
pub const OPTION_COLOR: &str = "color";
pub const OPTION_ARIA_VALUE_TEXT: &str = "ariaValueText";

pub const LOG_LEVEL: log::Level = log::Level::Info;
