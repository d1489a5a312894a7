//! Identity and fixed tuning of an animated entity.
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stable key identifying an entity within one scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap an identity string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identity string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// How quickly and how far an entity drifts from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WanderConfig {
    /// Multiplier applied to elapsed time before sampling noise. Lower is
    /// slower.
    pub noise_time_scale: f32,
    /// Maximum X/Y offset from the anchor.
    pub wander_range: f32,
}

/// Per-axis angular rates, in radians per second at unit rotation speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationProfile(pub Vec3);

/// Everything needed to create an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    /// Identity, unique within the scene.
    pub id: EntityId,
    /// Fixed anchor the entity wanders around.
    pub base: Vec3,
    /// Collision influence radius.
    pub radius: f32,
    /// Wander tuning.
    pub wander: WanderConfig,
    /// Cosmetic spin multiplier.
    pub rotation_speed: f32,
    /// Cosmetic spin rates per axis.
    pub rotation: RotationProfile,
}

impl ShapeSpec {
    /// Euler rotation (XYZ, radians) at `elapsed` seconds.
    ///
    /// Purely time-derived; it never feeds back into the position simulation.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use wander::entity::{RotationProfile, ShapeSpec, WanderConfig};
    /// let spec = ShapeSpec {
    ///     id: "sphere".into(),
    ///     base: Vec3::ZERO,
    ///     radius: 1.0,
    ///     wander: WanderConfig { noise_time_scale: 0.1, wander_range: 1.0 },
    ///     rotation_speed: 2.0,
    ///     rotation: RotationProfile(Vec3::new(0.15, 0.2, 0.0)),
    /// };
    /// let r = spec.rotation_at(10.0);
    /// assert!((r.x - 3.0).abs() < 1e-5);
    /// assert!((r.y - 4.0).abs() < 1e-5);
    /// assert_eq!(r.z, 0.0);
    /// ```
    #[must_use]
    pub fn rotation_at(&self, elapsed: f32) -> Vec3 {
        self.rotation.0 * elapsed * self.rotation_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_serialises_as_plain_string() {
        let json = serde_json::to_string(&EntityId::new("torus")).expect("serialise id");
        assert_eq!(json, "\"torus\"");
    }

    #[test]
    fn entity_id_displays_its_identity() {
        assert_eq!(EntityId::from("box").to_string(), "box");
    }
}
