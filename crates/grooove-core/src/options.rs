use crate::constants::{DEFAULT_ARIA_VALUE_TEXT, DEFAULT_COLOR_RGB};
use crate::error::GroooveError;
use crate::render::Rgb;

/// Options as supplied by the caller, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawOptions {
    /// `#RRGGBB`, case-insensitive.
    pub color: Option<String>,
    pub aria_value_text: Option<String>,
}

/// Validated options with defaults filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub color: Rgb,
    pub aria_value_text: String,
}

impl Default for Options {
    fn default() -> Self {
        let [r, g, b] = DEFAULT_COLOR_RGB;
        Self {
            color: Rgb::new(r, g, b),
            aria_value_text: DEFAULT_ARIA_VALUE_TEXT.to_string(),
        }
    }
}

impl RawOptions {
    pub fn normalize(self) -> Result<Options, GroooveError> {
        let defaults = Options::default();
        let color = match self.color {
            Some(hex) => parse_hex_color(&hex)?,
            None => defaults.color,
        };
        Ok(Options {
            color,
            aria_value_text: self.aria_value_text.unwrap_or(defaults.aria_value_text),
        })
    }
}

/// Parse `#RRGGBB` into its components.
pub fn parse_hex_color(hex: &str) -> Result<Rgb, GroooveError> {
    let invalid = || GroooveError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let component = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(component(0)?, component(2)?, component(4)?))
}
