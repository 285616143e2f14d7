//! Playing field derived once from the surface size.
//!
//! Everything here is computed at start-up and never mutated while the animation
//! runs; the frame engine only reads it.

use crate::easing::solve_tension_for_overshoot;
use crate::error::GroooveError;
use crate::params::AnimationParams;

/// Which horizontal boundary an edge zone belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeSide {
    Left,
    Right,
}

impl EdgeSide {
    /// Direction pointing away from this edge, towards the middle of the surface.
    #[inline]
    pub fn inward_sign(self) -> f64 {
        match self {
            EdgeSide::Left => 1.0,
            EdgeSide::Right => -1.0,
        }
    }
}

/// Horizontal band `[left, right]` next to one of the boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeZone {
    pub side: EdgeSide,
    pub left: f64,
    pub right: f64,
}

impl EdgeZone {
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Normalized distance into the zone, 0 at the inner border and 1 at the
    /// boundary (clamped there for circles beyond it). `None` outside the zone or
    /// when the zone is empty.
    pub fn position(&self, x: f64) -> Option<f64> {
        let width = self.width();
        if width <= 0.0 {
            return None;
        }
        let raw = match self.side {
            EdgeSide::Left if x <= self.right => 1.0 - (x - self.left) / width,
            EdgeSide::Right if x >= self.left => (x - self.left) / width,
            _ => return None,
        };
        Some(raw.min(1.0))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConstants {
    pub width: f64,
    pub height: f64,
    pub maximal_radius: f64,
    /// Distance between neighbouring circle centres (one diameter).
    pub pitch: f64,
    pub circle_count: usize,
    pub left_edge: EdgeZone,
    pub right_edge: EdgeZone,
    pub fade_in_duration: f64,
    pub circle_movement_duration: f64,
    pub seeker_trip_duration: f64,
    /// Distance from the seeker within which circles grow.
    pub seeker_reach: f64,
    /// Tension fed to the overshoot curve inside the edge zones.
    pub edge_tension: f64,
}

impl LayoutConstants {
    pub fn new(width: f64, height: f64, params: &AnimationParams) -> Result<Self, GroooveError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GroooveError::InvalidDimensions { width, height });
        }
        params.validate()?;

        let maximal_radius = height * 0.5;
        let pitch = 2.0 * maximal_radius;
        // Enough circles to tile the width, plus the one entering from the left.
        let tiles = (width / pitch).ceil();
        if tiles >= params.max_circles as f64 {
            return Err(GroooveError::TooManyCircles(
                (tiles as usize).saturating_add(1),
            ));
        }
        let circle_count = tiles as usize + 1;

        let edge_width = params.edges_width * maximal_radius;
        let layout = Self {
            width,
            height,
            maximal_radius,
            pitch,
            circle_count,
            left_edge: EdgeZone {
                side: EdgeSide::Left,
                left: 0.0,
                right: edge_width,
            },
            right_edge: EdgeZone {
                side: EdgeSide::Right,
                left: width - edge_width,
                right: width,
            },
            fade_in_duration: params.fade_in_ms,
            circle_movement_duration: params.circle_movement_duration(),
            seeker_trip_duration: (width / maximal_radius + 2.0)
                * params.seeker_movement_duration(),
            seeker_reach: params.seeker_influence_width * maximal_radius,
            edge_tension: solve_tension_for_overshoot(params.edges_overshoot),
        };
        log::debug!(
            "[layout] {}x{} radius={:.2} circles={} trip={:.1}ms tension={:.5}",
            width,
            height,
            layout.maximal_radius,
            layout.circle_count,
            layout.seeker_trip_duration,
            layout.edge_tension
        );
        Ok(layout)
    }

    /// Vertical centre shared by every circle.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.height * 0.5
    }

    /// Edge zone the circle at `x` falls in, with its normalized position.
    ///
    /// When both zones apply (narrow surfaces) the larger position wins; on a tie
    /// the left zone is chosen.
    pub fn edge_position(&self, x: f64) -> Option<(EdgeSide, f64)> {
        match (self.left_edge.position(x), self.right_edge.position(x)) {
            (Some(l), Some(r)) if r > l => Some((EdgeSide::Right, r)),
            (Some(l), _) => Some((EdgeSide::Left, l)),
            (None, Some(r)) => Some((EdgeSide::Right, r)),
            (None, None) => None,
        }
    }
}
