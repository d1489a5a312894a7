//! Cosmetic tags handed to the rendering layer.
//!
//! Geometry and colour never influence the simulation; they live in a
//! lookup keyed by identity so renderers can style entities without the
//! kernel knowing about meshes or materials.

use glam::Vec3;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, RotationProfile};

/// Geometry a renderer should draw for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Large distorted sphere.
    Sphere,
    /// Ring torus.
    Torus,
    /// Regular octahedron.
    Octahedron,
    /// Cube.
    Box,
    /// Small sphere.
    SmallSphere,
    /// Small octahedron.
    SmallOctahedron,
}

impl ShapeKind {
    /// Default spin rates for this geometry.
    #[must_use]
    pub const fn rotation_profile(self) -> RotationProfile {
        let rates = match self {
            Self::Sphere => Vec3::new(0.15, 0.2, 0.0),
            Self::Torus => Vec3::new(0.2, 0.0, 0.15),
            Self::Octahedron => Vec3::new(0.25, 0.15, 0.0),
            Self::Box => Vec3::new(0.1, 0.15, 0.0),
            Self::SmallSphere => Vec3::new(0.3, 0.2, 0.0),
            Self::SmallOctahedron => Vec3::new(0.35, 0.25, 0.0),
        };
        RotationProfile(rates)
    }

    /// Human-readable label, used for scene-graph node names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sphere => "Sphere",
            Self::Torus => "Torus",
            Self::Octahedron => "Octahedron",
            Self::Box => "Box",
            Self::SmallSphere => "SmallSphere",
            Self::SmallOctahedron => "SmallOctahedron",
        }
    }
}

/// Rendering hints for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    /// Geometry to draw.
    pub kind: ShapeKind,
    /// Hex colour such as `#047857`.
    pub color: String,
}

/// Visual hints keyed by entity identity.
#[derive(Debug, Default, Clone)]
pub struct VisualCatalog {
    visuals: HashMap<EntityId, Visual>,
}

impl VisualCatalog {
    /// Record the visual for `id`, replacing any previous one.
    pub fn insert(&mut self, id: EntityId, visual: Visual) {
        self.visuals.insert(id, visual);
    }

    /// Visual for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&Visual> {
        self.visuals.get(id)
    }

    /// Forget the visual for `id`.
    pub fn remove(&mut self, id: &EntityId) -> Option<Visual> {
        self.visuals.remove(id)
    }

    /// Number of entities with visuals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\"small_octahedron\"", ShapeKind::SmallOctahedron)]
    #[case("\"box\"", ShapeKind::Box)]
    fn kinds_deserialise_from_snake_case(#[case] json: &str, #[case] expected: ShapeKind) {
        let kind: ShapeKind = serde_json::from_str(json).expect("valid kind");
        assert_eq!(kind, expected);
    }

    #[test]
    fn torus_spins_about_x_and_z() {
        let RotationProfile(rates) = ShapeKind::Torus.rotation_profile();
        assert_eq!(rates.y, 0.0);
        assert!(rates.x > 0.0 && rates.z > 0.0);
    }

    #[test]
    fn catalog_round_trips_by_identity() {
        let mut catalog = VisualCatalog::default();
        let id = EntityId::from("box");
        catalog.insert(
            id.clone(),
            Visual {
                kind: ShapeKind::Box,
                color: "#065f46".to_owned(),
            },
        );
        assert_eq!(catalog.get(&id).map(|v| v.kind), Some(ShapeKind::Box));
        assert!(catalog.remove(&id).is_some());
        assert!(catalog.is_empty());
    }
}
