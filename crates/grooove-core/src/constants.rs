// Animation tuning shared by every frontend. Durations are in milliseconds,
// widths are expressed in multiples of the maximal circle radius.

/// Playback speed. Set this to 0.5 or 0.25 to watch the animation in more detail.
pub const SPEED: f64 = 1.0;

/// Time it takes for the indicator to fade in (12 frames at 60 Hz). Operations that
/// finish almost immediately never get to flash a few stray dots on screen.
/// Not affected by `SPEED`.
pub const FADE_IN_DURATION_MS: f64 = 12.0 * 1000.0 / 60.0;

/// Time for a circle to move onto the spot where its neighbour was.
pub const CIRCLE_MOVEMENT_DURATION_MS: f64 = 920.0;

/// Time for the seeker to move from one circle to where its neighbour was.
pub const SEEKER_MOVEMENT_DURATION_MS: f64 = 290.0;

pub const SEEKER_INFLUENCE_WIDTH: f64 = 2.8; // reach of the seeker around its position
pub const EDGES_WIDTH: f64 = 2.3; // width of each edge zone

/// How far past full size a circle springs while crossing an edge zone.
/// Solved into a tension of ~1.8923 once per layout.
pub const EDGES_RADIUS_OVERSHOOT: f64 = 0.12;

/// Circles rest at half their maximal radius unless the seeker is near.
pub const OFF_RADIUS_MULTIPLIER: f64 = 0.5;

/// Default upper bound on circles per frame (`AnimationParams::max_circles`).
/// Surfaces needing more are rejected at construction instead of allocating without limit.
pub const MAX_CIRCLES: usize = 4096;

pub const DEFAULT_COLOR_RGB: [u8; 3] = [255, 255, 255];
pub const DEFAULT_ARIA_VALUE_TEXT: &str = "busy";
