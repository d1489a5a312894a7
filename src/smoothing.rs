//! World-volume clamping and frame-rate-independent smoothing.
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::vector_math::decay_factor;
use crate::{BOUND_X, BOUND_Y, BOUND_Z_MAX, BOUND_Z_MIN, SMOOTHING_RESIDUAL};

/// Axis-aligned volume shared by every entity in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    /// X is clamped to `[-x, x]`.
    pub x: f32,
    /// Y is clamped to `[-y, y]`.
    pub y: f32,
    /// Lower Z limit.
    pub z_min: f32,
    /// Upper Z limit.
    pub z_max: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x: BOUND_X,
            y: BOUND_Y,
            z_min: BOUND_Z_MIN,
            z_max: BOUND_Z_MAX,
        }
    }
}

impl Bounds {
    /// Clamp each axis of `point` into the volume independently.
    ///
    /// NaN components are replaced by the lower limit so the result always
    /// lies inside a well-formed volume. Malformed volumes (inverted or NaN
    /// limits) still clamp without panicking; the result is then only
    /// finite, not contained.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use wander::smoothing::Bounds;
    /// let clamped = Bounds::default().clamp(Vec3::new(10.0, -10.0, 0.0));
    /// assert_eq!(clamped, Vec3::new(4.5, -3.5, -2.0));
    /// ```
    #[must_use]
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            clamp_axis(point.x, -self.x, self.x),
            clamp_axis(point.y, -self.y, self.y),
            clamp_axis(point.z, self.z_min, self.z_max),
        )
    }

    /// Whether `point` lies inside the volume, limits included.
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.x.abs() <= self.x
            && point.y.abs() <= self.y
            && (self.z_min..=self.z_max).contains(&point.z)
    }
}

/// Total clamp: NaN inputs and inverted or NaN limits never panic.
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    let clamped = value.max(min).min(max);
    if clamped.is_nan() {
        0.0
    } else {
        clamped
    }
}

/// Exponential smoother whose cumulative effect depends only on elapsed
/// wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Smoother {
    /// Fraction of the gap left after one second; must lie in `(0, 1)`.
    pub residual: f32,
}

impl Default for Smoother {
    fn default() -> Self {
        Self {
            residual: SMOOTHING_RESIDUAL,
        }
    }
}

impl Smoother {
    /// Move `current` towards `target` by `delta` seconds of decay.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use wander::smoothing::Smoother;
    /// let smoother = Smoother::default();
    /// assert_eq!(smoother.step(Vec3::ZERO, Vec3::ONE, 0.0), Vec3::ZERO);
    /// let settled = smoother.step(Vec3::ZERO, Vec3::ONE, 30.0);
    /// assert!((settled - Vec3::ONE).length() < 1e-5);
    /// ```
    #[must_use]
    pub fn step(&self, current: Vec3, target: Vec3, delta: f32) -> Vec3 {
        current.lerp(target, decay_factor(self.residual, delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case::inside(Vec3::new(1.0, -1.0, -4.0), Vec3::new(1.0, -1.0, -4.0))]
    #[case::far_x(Vec3::new(-100.0, 0.0, -4.0), Vec3::new(-4.5, 0.0, -4.0))]
    #[case::far_y(Vec3::new(0.0, 9.0, -4.0), Vec3::new(0.0, 3.5, -4.0))]
    #[case::too_near(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -2.0))]
    #[case::too_far(Vec3::new(0.0, 0.0, -7.0), Vec3::new(0.0, 0.0, -6.0))]
    fn clamp_limits_each_axis(#[case] input: Vec3, #[case] expected: Vec3) {
        assert_eq!(Bounds::default().clamp(input), expected);
    }

    #[test]
    fn clamp_replaces_nan() {
        let bounds = Bounds::default();
        let clamped = bounds.clamp(Vec3::new(f32::NAN, f32::NAN, f32::NAN));
        assert!(bounds.contains(clamped));
    }

    #[rstest]
    #[case::inverted(-1.0, 1.0, -1.0, -1.0)]
    #[case::nan_lower(2.0, f32::NAN, -2.0, -2.0)]
    #[case::nan_upper(-7.0, -6.0, f32::NAN, -6.0)]
    #[case::nan_everything(f32::NAN, f32::NAN, f32::NAN, 0.0)]
    fn malformed_limits_clamp_without_panicking(
        #[case] value: f32,
        #[case] min: f32,
        #[case] max: f32,
        #[case] expected: f32,
    ) {
        assert_eq!(clamp_axis(value, min, max), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(10)]
    #[case(100)]
    fn smoothing_is_independent_of_step_count(#[case] steps: u16) {
        let smoother = Smoother::default();
        let target = Vec3::new(3.0, -2.0, 1.0);
        let total = 0.5_f32;
        let delta = total / f32::from(steps);
        let mut position = Vec3::ZERO;
        for _ in 0..steps {
            position = smoother.step(position, target, delta);
        }
        let expected = target * (1.0 - SMOOTHING_RESIDUAL.powf(total));
        assert_abs_diff_eq!(position.x, expected.x, epsilon = 1e-4);
        assert_abs_diff_eq!(position.y, expected.y, epsilon = 1e-4);
        assert_abs_diff_eq!(position.z, expected.z, epsilon = 1e-4);
    }
}
