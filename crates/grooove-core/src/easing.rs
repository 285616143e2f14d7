//! Easing curves used to shape circle radii.
//!
//! All functions take an elapsed fraction, where 0 is the start of a glide and 1
//! its end, and are pure.

use std::f64::consts::PI;

/// Accelerate/decelerate curve `(1 - cos(t·π)) / 2`.
///
/// Maps `[0, 1]` onto `[0, 1]`, monotonic, with zero slope at both ends.
#[inline]
pub fn ease_in_out(t: f64) -> f64 {
    (1.0 - (t * PI).cos()) / 2.0
}

/// Overshooting curve `(t - 1)²·(tension·t + t - 1) + 1`.
///
/// Starts at 0 and always ends at exactly 1. For a non-negative tension the output
/// stays non-negative on `[0, 1]` and peaks slightly above 1 before settling.
#[inline]
pub fn overshoot(t: f64, tension: f64) -> f64 {
    (t - 1.0) * (t - 1.0) * (tension * t + t - 1.0) + 1.0
}

/// Input at which [`overshoot`] reaches its maximum for the given tension.
#[inline]
pub fn overshoot_peak_input(tension: f64) -> f64 {
    (3.0 + tension) / (3.0 + 3.0 * tension)
}

/// Tension for [`overshoot`] whose peak exceeds 1 by exactly `amount`.
///
/// Closed form: setting the derivative to zero gives the peak input
/// `(3 + T) / (3 + 3T)`, and the peak output
/// `(3 + T)²(3 + 4T) / (27(1 + T)²)` is solved for `T` via its single real cubic root.
/// Non-positive (and NaN) amounts yield 0, which is the curve without overshoot.
pub fn solve_tension_for_overshoot(amount: f64) -> f64 {
    // Negative amounts would produce an "undershoot" tension; not useful here.
    if !(amount > 0.0) {
        return 0.0;
    }
    let output = 1.0 + amount;
    let output_squared = output * output;
    let output_cubed = output_squared * output;
    // output³ - 2·output² + output, factored to avoid cancellation for tiny amounts
    let root = (output * amount * amount).sqrt();
    let part =
        (27.0 * output_cubed - 45.0 * output_squared + 8.0 * root + 17.0 * output + 1.0).cbrt();
    0.75 * part - (-729.0 * output_squared + 810.0 * output - 81.0) / (108.0 * part)
        + 2.25 * amount
}
