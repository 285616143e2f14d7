//! Per-frame geometry: where every circle sits, how large it is and how opaque.
//!
//! [`compute_frame`] is a pure function of the elapsed time and the layout, so the
//! same inputs always produce the same circles.

use crate::constants::OFF_RADIUS_MULTIPLIER;
use crate::easing::{ease_in_out, overshoot};
use crate::layout::LayoutConstants;
use glam::DVec2;
use smallvec::SmallVec;

/// One disc to paint. Recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDescriptor {
    pub center: DVec2,
    pub radius: f64,
    pub alpha: f64,
}

/// The highlight sweeping across the circles.
///
/// - `position` runs from `-maximal_radius` to `width + maximal_radius` over one trip
/// - `clamped_position` is `position` limited to `[0, width]`
/// - `influence` is `sin(clamped / width · π)²`: 0 at both ends of the trip, 1 halfway
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeekerState {
    pub position: f64,
    pub clamped_position: f64,
    pub influence: f64,
}

impl SeekerState {
    pub fn at(elapsed_ms: f64, layout: &LayoutConstants) -> Self {
        let trip_time = elapsed_ms.rem_euclid(layout.seeker_trip_duration);
        let span = layout.width + 2.0 * layout.maximal_radius;
        let position = trip_time / layout.seeker_trip_duration * span - layout.maximal_radius;
        let clamped_position = position.clamp(0.0, layout.width);
        let sine = (clamped_position / layout.width * std::f64::consts::PI).sin();
        Self {
            position,
            clamped_position,
            influence: sine * sine,
        }
    }
}

pub type Circles = SmallVec<[CircleDescriptor; 16]>;

/// Everything computed for one frame, circles ordered left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub elapsed_ms: f64,
    pub base_alpha: f64,
    pub seeker: SeekerState,
    pub circles: Circles,
}

/// Global opacity while the indicator fades in.
#[inline]
pub fn fade_in_alpha(elapsed_ms: f64, layout: &LayoutConstants) -> f64 {
    (elapsed_ms / layout.fade_in_duration).clamp(0.0, 1.0)
}

/// Leftmost circle centre. Lies in `(-pitch, 0]` and scrolls leftwards, repeating
/// every circle movement duration.
#[inline]
pub fn first_circle_x(elapsed_ms: f64, layout: &LayoutConstants) -> f64 {
    let phase = (elapsed_ms / layout.circle_movement_duration).rem_euclid(1.0);
    (1.0 - phase) * layout.pitch - layout.pitch
}

pub fn compute_frame(elapsed_ms: f64, layout: &LayoutConstants) -> Frame {
    let elapsed_ms = if elapsed_ms.is_finite() {
        elapsed_ms.max(0.0)
    } else {
        0.0
    };
    let base_alpha = fade_in_alpha(elapsed_ms, layout);
    let seeker = SeekerState::at(elapsed_ms, layout);
    let start_x = first_circle_x(elapsed_ms, layout);

    let circles = (0..layout.circle_count)
        .map(|i| shape_circle(start_x + i as f64 * layout.pitch, base_alpha, &seeker, layout))
        .collect();

    Frame {
        elapsed_ms,
        base_alpha,
        seeker,
        circles,
    }
}

fn shape_circle(
    x: f64,
    base_alpha: f64,
    seeker: &SeekerState,
    layout: &LayoutConstants,
) -> CircleDescriptor {
    // Grow circles close to the seeker.
    let distance = (x - seeker.position).abs();
    let mut radius_multiplier = if layout.seeker_reach > 0.0 && distance <= layout.seeker_reach {
        OFF_RADIUS_MULTIPLIER
            + (1.0 - OFF_RADIUS_MULTIPLIER)
                * seeker.influence
                * ease_in_out(1.0 - distance / layout.seeker_reach)
    } else {
        OFF_RADIUS_MULTIPLIER
    };

    // Shrink, bounce and fade inside the edge zones.
    let mut alpha = base_alpha;
    let mut displacement = 0.0;
    if let Some((side, edge_position)) = layout.edge_position(x) {
        if edge_position > 0.0 {
            radius_multiplier *= overshoot(1.0 - edge_position, layout.edge_tension);
            // Push shrunken circles away from the edge so the gap stays even.
            if radius_multiplier < OFF_RADIUS_MULTIPLIER {
                displacement = (OFF_RADIUS_MULTIPLIER - radius_multiplier) * side.inward_sign();
            }
            if edge_position > 0.5 {
                alpha *= 1.0 - 2.0 * (edge_position - 0.5);
            }
        }
    }

    CircleDescriptor {
        center: DVec2::new(x + layout.maximal_radius * displacement, layout.center_y()),
        radius: (layout.maximal_radius * radius_multiplier).max(0.0),
        alpha: alpha.clamp(0.0, 1.0),
    }
}
