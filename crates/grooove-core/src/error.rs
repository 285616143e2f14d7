/// Errors raised while configuring a grooove. Steady-state frame computation never fails.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum GroooveError {
    #[error("surface dimensions must be finite and positive (got {width}x{height})")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("surface would need {0} circles per frame, which exceeds the configured maximum")]
    TooManyCircles(usize),

    #[error("invalid animation parameter: {0}")]
    InvalidParams(&'static str),

    #[error("If the color option is set, it must be formatted in the #RRGGBB hexadecimal notation (got {0:?})")]
    InvalidColor(String),
}
