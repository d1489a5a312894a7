//! Default tuning for the motion kernel.
//!
//! Every value here is the default for a field in
//! [`WanderSettings`](crate::config::WanderSettings); hosts override them
//! through configuration rather than editing the constants.

/// Half-width of the world volume along X.
pub const BOUND_X: f32 = 4.5;
/// Half-height of the world volume along Y.
pub const BOUND_Y: f32 = 3.5;
/// Nearest depth an entity may reach.
pub const BOUND_Z_MIN: f32 = -6.0;
/// Farthest depth an entity may reach.
pub const BOUND_Z_MAX: f32 = -2.0;

/// Extra clearance added to the sum of two radii before entities push apart.
pub const COLLISION_MARGIN: f32 = 0.4;
/// Fraction of the overlap removed per frame by the soft collision push.
pub const COLLISION_PUSH_FACTOR: f32 = 0.6;

/// Planar distance from the pointer inside which entities are repelled.
pub const POINTER_RADIUS: f32 = 2.5;
/// Peak displacement applied when the pointer sits on top of an entity.
pub const POINTER_STRENGTH: f32 = 2.0;

/// Distances at or below this value skip the corresponding push.
pub const DEGENERATE_EPSILON: f32 = 0.001;

/// Fraction of the remaining gap left after one second of smoothing.
pub const SMOOTHING_RESIDUAL: f32 = 0.001;

/// Fixed second coordinate used when sampling the X noise field.
pub const NOISE_PHASE_X: f64 = 0.5;
/// Fixed second coordinate used when sampling the Y noise field.
pub const NOISE_PHASE_Y: f64 = 1.5;
/// Fixed second coordinate used when sampling the Z noise field.
pub const NOISE_PHASE_Z: f64 = 2.5;
/// Depth wander amplitude; independent of the per-entity wander range.
pub const DEPTH_WANDER_RANGE: f32 = 0.8;
/// Depth drifts at this fraction of the entity's noise time scale.
pub const DEPTH_TIME_SCALE: f64 = 0.5;

/// Vertical field of view of the default camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
/// Distance from the default camera to the pointer plane.
pub const CAMERA_DISTANCE: f32 = 8.0;
/// Default viewport aspect ratio.
pub const CAMERA_ASPECT: f32 = 16.0 / 9.0;

/// Hosting API queried by the project feed.
pub const PROJECTS_API_BASE: &str = "https://api.github.com";
