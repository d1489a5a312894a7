//! Convenience constructors for scenes and specs used in tests.

use glam::Vec3;
use wander::{
    EntityId, MotionRules, RotationProfile, SceneDriver, ShapeSpec, SpatialRegistry,
    WanderConfig, WanderController,
};

/// Build a spec with a unit rotation profile and gentle wander.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use test_utils::scene::shape;
/// let spec = shape("sphere", Vec3::new(0.0, 0.0, -4.0), 1.0);
/// assert_eq!(spec.id.as_str(), "sphere");
/// assert_eq!(spec.radius, 1.0);
/// ```
pub fn shape(id: &str, base: Vec3, radius: f32) -> ShapeSpec {
    wandering(id, base, radius, 0.2, 1.0)
}

/// Build a spec with explicit wander tuning.
pub fn wandering(
    id: &str,
    base: Vec3,
    radius: f32,
    noise_time_scale: f32,
    wander_range: f32,
) -> ShapeSpec {
    ShapeSpec {
        id: EntityId::from(id),
        base,
        radius,
        wander: WanderConfig {
            noise_time_scale,
            wander_range,
        },
        rotation_speed: 1.0,
        rotation: RotationProfile(Vec3::ONE),
    }
}

/// Build a spec whose candidate never changes over time.
///
/// X and Y stay on the anchor; depth keeps the constant offset its noise
/// field yields at time zero. See [`resting_point`].
pub fn anchored(id: &str, base: Vec3, radius: f32) -> ShapeSpec {
    wandering(id, base, radius, 0.0, 0.0)
}

/// Candidate of `spec` at time zero, before any collision, pointer, or
/// bounds adjustment. For [`anchored`] specs this holds at every time.
pub fn resting_point(spec: &ShapeSpec) -> Vec3 {
    let mut scratch = SpatialRegistry::new();
    WanderController::new(spec.clone(), &mut scratch).candidate(0.0)
}

/// Scene with default rules over `specs`.
///
/// # Panics
/// Panics if two specs share an identity.
pub fn driver(specs: Vec<ShapeSpec>) -> SceneDriver {
    SceneDriver::new(specs, MotionRules::default())
        .unwrap_or_else(|e| panic!("test scene rejected: {e}"))
}
