//! Shared table of each entity's last settled position and radius.
//!
//! A [`SpatialRegistry`] is owned by exactly one scene and handed by
//! reference to every controller. Each entity writes only its own entry;
//! everyone reads everyone else's. Within a frame the registry therefore
//! mixes positions already written this tick with positions from the last
//! tick, depending on processing order. At single-digit entity counts this
//! stays stable and free of jitter, so no barrier is enforced.

use glam::Vec3;
use hashbrown::HashMap;
use log::debug;

use crate::entity::EntityId;

/// Position and collision radius published by one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryEntry {
    /// Most recent smoothed position.
    pub position: Vec3,
    /// Collision influence radius.
    pub radius: f32,
}

/// Identity-keyed lookup used for collision queries.
#[derive(Debug, Default, Clone)]
pub struct SpatialRegistry {
    entries: HashMap<EntityId, RegistryEntry>,
}

impl SpatialRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `id`.
    ///
    /// Overwrites reuse the existing key, so per-frame updates do not
    /// allocate.
    pub fn upsert(&mut self, id: &EntityId, entry: RegistryEntry) {
        if let Some(slot) = self.entries.get_mut(id) {
            *slot = entry;
        } else {
            debug!("registering {id} at {:?} (radius {})", entry.position, entry.radius);
            self.entries.insert(id.clone(), entry);
        }
    }

    /// Drop the entry for `id`, returning it if present.
    pub fn remove(&mut self, id: &EntityId) -> Option<RegistryEntry> {
        let removed = self.entries.remove(id);
        if removed.is_some() {
            debug!("removed {id} from spatial registry");
        }
        removed
    }

    /// Entry for `id`, if registered.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&RegistryEntry> {
        self.entries.get(id)
    }

    /// Whether `id` has an entry.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entity is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry except the one belonging to `id`, in no particular order.
    pub fn others<'a>(
        &'a self,
        id: &'a EntityId,
    ) -> impl Iterator<Item = (&'a EntityId, &'a RegistryEntry)> + 'a {
        self.entries.iter().filter(move |(other, _)| *other != id)
    }
}

impl FromIterator<(EntityId, RegistryEntry)> for SpatialRegistry {
    /// Later entries for the same identity overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (EntityId, RegistryEntry)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (id, entry) in iter {
            registry.upsert(&id, entry);
        }
        registry
    }
}
