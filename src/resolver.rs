//! Soft collision avoidance and pointer repulsion.
//!
//! Both adjustments nudge the same candidate target: collisions first, then
//! the pointer. Separations at or below [`DEGENERATE_EPSILON`] are skipped
//! rather than normalised, so coincident entities neither move nor produce
//! NaN. The pairwise pass is quadratic in the number of entities, which is
//! fine for a handful of shapes.

use glam::{Vec2, Vec3};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::registry::SpatialRegistry;
use crate::vector_math::{planar_separation, separation};
use crate::{
    COLLISION_MARGIN, COLLISION_PUSH_FACTOR, DEGENERATE_EPSILON, POINTER_RADIUS, POINTER_STRENGTH,
};

/// Tuning for pairwise soft collisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Clearance added to the sum of both radii.
    pub margin: f32,
    /// Fraction of the overlap pushed out per frame.
    pub push_factor: f32,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            margin: COLLISION_MARGIN,
            push_factor: COLLISION_PUSH_FACTOR,
        }
    }
}

/// Tuning for pointer repulsion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepulsionSettings {
    /// Planar radius of influence around the pointer.
    pub radius: f32,
    /// Displacement applied when the pointer is (almost) on the entity.
    pub strength: f32,
}

impl Default for RepulsionSettings {
    fn default() -> Self {
        Self {
            radius: POINTER_RADIUS,
            strength: POINTER_STRENGTH,
        }
    }
}

/// Adjusts candidate targets away from neighbours and the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Resolver {
    /// Pairwise collision tuning.
    pub collision: CollisionSettings,
    /// Pointer repulsion tuning.
    pub repulsion: RepulsionSettings,
}

impl Resolver {
    /// Push `candidate` out of every other registered entity's clearance
    /// sphere.
    ///
    /// Pushes accumulate: each one moves the candidate before the next
    /// neighbour is measured.
    #[must_use]
    pub fn separate(
        &self,
        candidate: Vec3,
        id: &EntityId,
        radius: f32,
        registry: &SpatialRegistry,
    ) -> Vec3 {
        registry.others(id).fold(candidate, |target, (other_id, other)| {
            let min_distance = radius + other.radius + self.collision.margin;
            match separation(target, other.position, DEGENERATE_EPSILON) {
                Some(sep) if sep.distance < min_distance => {
                    let push = (min_distance - sep.distance) * self.collision.push_factor;
                    trace!("{id} pushed {push:.3} away from {other_id}");
                    target + sep.direction * push
                }
                _ => target,
            }
        })
    }

    /// Push `candidate` away from the pointer in the X/Y plane.
    ///
    /// `pointer` is in world units; `None` leaves the candidate untouched.
    #[must_use]
    pub fn repel(&self, candidate: Vec3, pointer: Option<Vec2>) -> Vec3 {
        let Some(pointer) = pointer else {
            return candidate;
        };
        let radius = self.repulsion.radius;
        match planar_separation(candidate.truncate(), pointer, DEGENERATE_EPSILON) {
            Some(sep) if sep.distance < radius => {
                let strength = (radius - sep.distance) / radius * self.repulsion.strength;
                let push = sep.direction * strength;
                candidate + push.extend(0.0)
            }
            _ => candidate,
        }
    }

    /// Apply [`Resolver::separate`] then [`Resolver::repel`].
    #[must_use]
    pub fn resolve(
        &self,
        candidate: Vec3,
        id: &EntityId,
        radius: f32,
        registry: &SpatialRegistry,
        pointer: Option<Vec2>,
    ) -> Vec3 {
        let separated = self.separate(candidate, id, radius, registry);
        self.repel(separated, pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryEntry;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn resolver() -> Resolver {
        Resolver::default()
    }

    fn registry_with(entries: &[(&str, Vec3, f32)]) -> SpatialRegistry {
        entries
            .iter()
            .map(|&(id, position, radius)| (EntityId::from(id), RegistryEntry { position, radius }))
            .collect()
    }

    #[rstest]
    fn overlapping_neighbour_pushes_along_the_connecting_line(resolver: Resolver) {
        let registry = registry_with(&[("other", Vec3::ZERO, 1.0)]);
        let candidate = Vec3::new(1.0, 0.0, 0.0);
        let moved = resolver.separate(candidate, &EntityId::from("self"), 1.0, &registry);
        // min distance 2.4, overlap 1.4, push 0.84
        assert_relative_eq!(moved.x, 1.84, epsilon = 1e-5);
        assert_eq!(moved.y, 0.0);
        assert_eq!(moved.z, 0.0);
    }

    #[rstest]
    fn distant_neighbour_is_ignored(resolver: Resolver) {
        let registry = registry_with(&[("other", Vec3::new(10.0, 0.0, 0.0), 1.0)]);
        let candidate = Vec3::new(1.0, 1.0, -4.0);
        let moved = resolver.separate(candidate, &EntityId::from("self"), 1.0, &registry);
        assert_eq!(moved, candidate);
    }

    #[rstest]
    fn own_entry_is_ignored(resolver: Resolver) {
        let registry = registry_with(&[("self", Vec3::new(0.5, 0.0, 0.0), 1.0)]);
        let moved = resolver.separate(Vec3::ZERO, &EntityId::from("self"), 1.0, &registry);
        assert_eq!(moved, Vec3::ZERO);
    }

    #[rstest]
    fn coincident_neighbour_is_skipped(resolver: Resolver) {
        let registry = registry_with(&[("other", Vec3::ONE, 1.0)]);
        let moved = resolver.separate(Vec3::ONE, &EntityId::from("self"), 1.0, &registry);
        assert_eq!(moved, Vec3::ONE);
        assert!(moved.is_finite());
    }

    #[rstest]
    #[case::no_pointer(None, Vec3::new(1.0, 0.0, -4.0))]
    #[case::far_pointer(Some(Vec2::new(-5.0, 0.0)), Vec3::new(1.0, 0.0, -4.0))]
    #[case::on_top(Some(Vec2::new(1.0, 0.0)), Vec3::new(1.0, 0.0, -4.0))]
    fn repel_leaves_candidate_alone(
        resolver: Resolver,
        #[case] pointer: Option<Vec2>,
        #[case] expected: Vec3,
    ) {
        assert_eq!(resolver.repel(Vec3::new(1.0, 0.0, -4.0), pointer), expected);
    }

    #[rstest]
    fn nearby_pointer_pushes_in_plane(resolver: Resolver) {
        let moved = resolver.repel(Vec3::new(1.0, 0.0, -4.0), Some(Vec2::ZERO));
        // distance 1.0 inside radius 2.5: strength (1.5 / 2.5) * 2 = 1.2
        assert_relative_eq!(moved.x, 2.2, epsilon = 1e-5);
        assert_eq!(moved.y, 0.0);
        assert_eq!(moved.z, -4.0);
    }

    #[rstest]
    fn collision_and_pointer_both_apply(resolver: Resolver) {
        let registry = registry_with(&[("other", Vec3::ZERO, 1.0)]);
        let moved = resolver.resolve(
            Vec3::new(1.0, 0.0, 0.0),
            &EntityId::from("self"),
            1.0,
            &registry,
            Some(Vec2::new(0.5, 0.0)),
        );
        // 1.84 after the collision, then 1.34 from the pointer: (2.5 - 1.34) / 2.5 * 2 = 0.928
        assert_relative_eq!(moved.x, 1.84 + 0.928, epsilon = 1e-4);
    }
}
