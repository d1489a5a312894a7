//! Utility helpers for tests.
pub mod scene;

use glam::Vec3;
use wander::Bounds;

/// Assert that `actual` is within `tolerance` of `expected` on every axis.
///
/// # Panics
/// Panics with both vectors if any component differs by more than
/// `tolerance`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// test_utils::assert_vec3_near(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0005), 1e-3);
/// ```
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff.max_element() <= tolerance,
        "expected {expected:?}, got {actual:?} (tolerance {tolerance})"
    );
}

/// Slack for lerp rounding at the faces of the volume.
pub const BOUNDS_TOLERANCE: f32 = 1e-4;

/// Assert that `point` lies inside `bounds`, allowing
/// [`BOUNDS_TOLERANCE`] at each face.
///
/// # Panics
/// Panics naming the offending point when it is non-finite or falls outside.
pub fn assert_within_bounds(point: Vec3, bounds: &Bounds) {
    assert!(
        point.is_finite(),
        "non-finite position {point:?} escaped the volume"
    );
    let inflated = Bounds {
        x: bounds.x + BOUNDS_TOLERANCE,
        y: bounds.y + BOUNDS_TOLERANCE,
        z_min: bounds.z_min - BOUNDS_TOLERANCE,
        z_max: bounds.z_max + BOUNDS_TOLERANCE,
    };
    assert!(
        inflated.contains(point),
        "{point:?} lies outside {bounds:?}"
    );
}
