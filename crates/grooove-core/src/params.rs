use crate::constants::*;
use crate::error::GroooveError;

/// Tunables for the animation. Durations are milliseconds at speed 1.
///
/// - `speed` divides the circle and seeker durations; the fade-in is unaffected
/// - `seeker_influence_width` and `edges_width` are measured in maximal radii
/// - `edges_overshoot` is how far past full size circles spring inside an edge zone
/// - `max_circles` caps the circles per frame, bounding per-frame allocation
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationParams {
    pub speed: f64,
    pub fade_in_ms: f64,
    pub circle_movement_ms: f64,
    pub seeker_movement_ms: f64,
    pub seeker_influence_width: f64,
    pub edges_width: f64,
    pub edges_overshoot: f64,
    pub max_circles: usize,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            speed: SPEED,
            fade_in_ms: FADE_IN_DURATION_MS,
            circle_movement_ms: CIRCLE_MOVEMENT_DURATION_MS,
            seeker_movement_ms: SEEKER_MOVEMENT_DURATION_MS,
            seeker_influence_width: SEEKER_INFLUENCE_WIDTH,
            edges_width: EDGES_WIDTH,
            edges_overshoot: EDGES_RADIUS_OVERSHOOT,
            max_circles: MAX_CIRCLES,
        }
    }
}

impl AnimationParams {
    #[inline]
    pub fn circle_movement_duration(&self) -> f64 {
        self.circle_movement_ms / self.speed
    }

    #[inline]
    pub fn seeker_movement_duration(&self) -> f64 {
        self.seeker_movement_ms / self.speed
    }

    pub fn validate(&self) -> Result<(), GroooveError> {
        fn positive(v: f64) -> bool {
            v.is_finite() && v > 0.0
        }
        fn non_negative(v: f64) -> bool {
            v.is_finite() && v >= 0.0
        }
        if !positive(self.speed) {
            return Err(GroooveError::InvalidParams("speed must be positive"));
        }
        if !positive(self.fade_in_ms) {
            return Err(GroooveError::InvalidParams("fade-in duration must be positive"));
        }
        if !positive(self.circle_movement_ms) {
            return Err(GroooveError::InvalidParams(
                "circle movement duration must be positive",
            ));
        }
        if !positive(self.seeker_movement_ms) {
            return Err(GroooveError::InvalidParams(
                "seeker movement duration must be positive",
            ));
        }
        if !non_negative(self.seeker_influence_width) {
            return Err(GroooveError::InvalidParams(
                "seeker influence width must not be negative",
            ));
        }
        if !non_negative(self.edges_width) {
            return Err(GroooveError::InvalidParams("edges width must not be negative"));
        }
        if !non_negative(self.edges_overshoot) {
            return Err(GroooveError::InvalidParams("edges overshoot must not be negative"));
        }
        if self.max_circles < 2 {
            return Err(GroooveError::InvalidParams("max circles must be at least 2"));
        }
        Ok(())
    }
}
