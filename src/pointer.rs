//! Host pointer input and its projection into world units.
//!
//! The kernel never reads input events. Hosts supply the pointer in
//! normalised device coordinates (both axes in `[-1, 1]`, Y up) together
//! with the size of the visible plane in world units.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{CAMERA_ASPECT, CAMERA_DISTANCE, CAMERA_FOV_DEGREES};

/// Pointer position in normalised device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    /// NDC position; `(0, 0)` is the centre of the viewport.
    pub ndc: Vec2,
}

impl PointerState {
    /// Create a pointer state from NDC components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            ndc: Vec2::new(x, y),
        }
    }

    /// Convert window coordinates (origin top-left, Y down) into NDC.
    ///
    /// Returns `None` for an empty window.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec2;
    /// use wander::pointer::PointerState;
    /// let centre = PointerState::from_window(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0));
    /// assert_eq!(centre, Some(PointerState::new(0.0, 0.0)));
    /// let top_left = PointerState::from_window(Vec2::ZERO, Vec2::new(800.0, 600.0));
    /// assert_eq!(top_left, Some(PointerState::new(-1.0, 1.0)));
    /// ```
    #[must_use]
    pub fn from_window(cursor: Vec2, window: Vec2) -> Option<Self> {
        if window.x <= 0.0 || window.y <= 0.0 {
            return None;
        }
        Some(Self::new(
            cursor.x / window.x * 2.0 - 1.0,
            1.0 - cursor.y / window.y * 2.0,
        ))
    }

    /// Project the pointer onto the entity plane, in world units.
    #[must_use]
    pub fn to_world(self, viewport: Viewport) -> Vec2 {
        Vec2::new(
            self.ndc.x * viewport.width / 2.0,
            self.ndc.y * viewport.height / 2.0,
        )
    }
}

/// Size of the visible plane in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Visible width.
    pub width: f32,
    /// Visible height.
    pub height: f32,
}

/// Perspective camera looking down -Z at the scene origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Vertical field of view, in degrees.
    pub fov_degrees: f32,
    /// Distance from the camera to the plane the pointer is projected onto.
    pub distance: f32,
    /// Width divided by height.
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            distance: CAMERA_DISTANCE,
            aspect: CAMERA_ASPECT,
        }
    }
}

impl Camera {
    /// Visible plane at [`Camera::distance`].
    ///
    /// # Examples
    /// ```
    /// use wander::pointer::Camera;
    /// let camera = Camera { fov_degrees: 90.0, distance: 1.0, aspect: 2.0 };
    /// let viewport = camera.viewport();
    /// assert!((viewport.height - 2.0).abs() < 1e-5);
    /// assert!((viewport.width - 4.0).abs() < 1e-5);
    /// ```
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let height = 2.0 * (self.fov_degrees.to_radians() / 2.0).tan() * self.distance;
        Viewport {
            width: height * self.aspect,
            height,
        }
    }

    /// Copy of this camera with a different aspect ratio.
    #[must_use]
    pub const fn with_aspect(self, aspect: f32) -> Self {
        Self { aspect, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_corners_map_to_viewport_edges() {
        let viewport = Viewport {
            width: 10.0,
            height: 6.0,
        };
        assert_eq!(
            PointerState::new(1.0, -1.0).to_world(viewport),
            Vec2::new(5.0, -3.0)
        );
    }

    #[test]
    fn empty_window_has_no_pointer() {
        assert!(PointerState::from_window(Vec2::ZERO, Vec2::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn default_camera_sees_a_plausible_plane() {
        let viewport = Camera::default().viewport();
        // 45 degrees at eight units shows a little over six units vertically.
        assert!((viewport.height - 6.627).abs() < 0.01);
        assert!(viewport.width > viewport.height);
    }
}
