//! Vector helpers that refuse to normalise degenerate separations.
use glam::{Vec2, Vec3};

/// Unit direction and length of the vector between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation<V> {
    /// Unit vector pointing from the source point towards the subject.
    pub direction: V,
    /// Distance between the two points.
    pub distance: f32,
}

/// Returns the separation from `source` to `subject` when it exceeds
/// `epsilon`.
///
/// Coincident, near-coincident and non-finite inputs yield `None`, so callers
/// never divide by zero or propagate NaN.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use wander::vector_math::separation;
/// let sep = separation(Vec3::new(3.0, 0.0, 4.0), Vec3::ZERO, 0.001).unwrap();
/// assert!((sep.distance - 5.0).abs() < 1e-6);
/// assert!((sep.direction.x - 0.6).abs() < 1e-6);
///
/// assert!(separation(Vec3::ONE, Vec3::ONE, 0.001).is_none());
/// ```
#[must_use]
pub fn separation(subject: Vec3, source: Vec3, epsilon: f32) -> Option<Separation<Vec3>> {
    let offset = subject - source;
    if !offset.is_finite() {
        return None;
    }
    let distance = offset.length();
    (distance > epsilon).then(|| Separation {
        direction: offset / distance,
        distance,
    })
}

/// Planar counterpart of [`separation`] for points in the X/Y plane.
#[must_use]
pub fn planar_separation(subject: Vec2, source: Vec2, epsilon: f32) -> Option<Separation<Vec2>> {
    let offset = subject - source;
    if !offset.is_finite() {
        return None;
    }
    let distance = offset.length();
    (distance > epsilon).then(|| Separation {
        direction: offset / distance,
        distance,
    })
}

/// Interpolation factor covering `delta` seconds of exponential decay.
///
/// `residual` is the fraction of the gap that remains after one second, so
/// the factor is `1 - residual^delta`. Non-positive or non-finite `delta`
/// yields `0.0`.
///
/// # Examples
/// ```
/// use wander::vector_math::decay_factor;
/// assert_eq!(decay_factor(0.001, 0.0), 0.0);
/// assert!((decay_factor(0.001, 1.0) - 0.999).abs() < 1e-6);
/// ```
#[must_use]
pub fn decay_factor(residual: f32, delta: f32) -> f32 {
    if !delta.is_finite() || delta <= 0.0 {
        return 0.0;
    }
    1.0 - residual.powf(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn separation_points_away_from_source() {
        let sep = separation(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.001)
            .expect("distinct points");
        assert_eq!(sep.direction, Vec3::X);
        assert_relative_eq!(sep.distance, 1.0);
    }

    #[test]
    fn separation_rejects_nan() {
        assert!(separation(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ZERO, 0.001).is_none());
    }

    #[test]
    fn separation_rejects_distances_at_epsilon() {
        assert!(separation(Vec3::new(0.001, 0.0, 0.0), Vec3::ZERO, 0.001).is_none());
    }

    #[test]
    fn planar_separation_measures_in_plane() {
        let sep = planar_separation(Vec2::new(0.0, -2.0), Vec2::ZERO, 0.001).expect("distinct");
        assert_eq!(sep.direction, Vec2::NEG_Y);
        assert_relative_eq!(sep.distance, 2.0);
    }

    #[test]
    fn decay_factor_rejects_negative_delta() {
        assert_eq!(decay_factor(0.001, -0.5), 0.0);
        assert_eq!(decay_factor(0.001, f32::NAN), 0.0);
    }

    #[test]
    fn decay_factor_saturates_for_long_pauses() {
        assert_relative_eq!(decay_factor(0.001, 10.0), 1.0, epsilon = 1e-6);
    }
}
