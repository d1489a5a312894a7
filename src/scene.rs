//! Scene driver owning every controller and the shared registry.
//!
//! The driver is the single owner of a scene's [`SpatialRegistry`]: it is
//! created with the driver and dropped with it. Each [`SceneDriver::tick`]
//! advances every controller once, in scene order, and reports one
//! [`EntityFrame`] per entity for the rendering layer.

use bevy::prelude::Resource;
use glam::Vec3;
use hashbrown::HashSet;
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::config::WanderSettings;
use crate::controller::{FrameTick, MotionRules, WanderController};
use crate::entity::{EntityId, ShapeSpec};
use crate::numeric::expect_f32;
use crate::pointer::{Camera, PointerState, Viewport};
use crate::registry::SpatialRegistry;
use crate::visuals::VisualCatalog;

/// Errors raised while assembling a scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Two specs share an identity.
    #[error("duplicate entity identity `{0}`")]
    DuplicateIdentity(EntityId),
}

/// Output for one entity after a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityFrame {
    /// Entity identity.
    pub id: EntityId,
    /// Smoothed world position.
    pub position: Vec3,
    /// XYZ Euler rotation in radians; purely time-derived.
    pub rotation: Vec3,
}

/// Owns a scene's controllers, registry, and cosmetic lookup.
#[derive(Debug, Resource)]
pub struct SceneDriver {
    controllers: Vec<WanderController>,
    registry: SpatialRegistry,
    visuals: VisualCatalog,
    rules: MotionRules,
    camera: Camera,
}

impl SceneDriver {
    /// Build a scene from `specs`, registering every entity at its anchor.
    ///
    /// # Errors
    /// Returns [`SceneError::DuplicateIdentity`] if two specs share an
    /// identity.
    pub fn new(specs: Vec<ShapeSpec>, rules: MotionRules) -> Result<Self, SceneError> {
        {
            let mut seen = HashSet::new();
            for spec in &specs {
                if !seen.insert(&spec.id) {
                    return Err(SceneError::DuplicateIdentity(spec.id.clone()));
                }
            }
        }

        let mut registry = SpatialRegistry::new();
        let controllers: Vec<_> = specs
            .into_iter()
            .map(|spec| WanderController::new(spec, &mut registry))
            .collect();
        info!("scene created with {} entities", controllers.len());

        Ok(Self {
            controllers,
            registry,
            visuals: VisualCatalog::default(),
            rules,
            camera: Camera::default(),
        })
    }

    /// Build the scene described by validated `settings`.
    ///
    /// # Errors
    /// Returns [`SceneError::DuplicateIdentity`] if the shapes share an
    /// identity.
    pub fn from_settings(settings: &WanderSettings) -> Result<Self, SceneError> {
        let driver = Self::new(settings.shape_specs(), settings.rules())?;
        Ok(driver
            .with_visuals(settings.visuals())
            .with_camera(settings.camera))
    }

    /// Attach cosmetic hints for the rendering layer.
    #[must_use]
    pub fn with_visuals(mut self, visuals: VisualCatalog) -> Self {
        self.visuals = visuals;
        self
    }

    /// Replace the camera used by [`SceneDriver::viewport`].
    #[must_use]
    pub const fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Visible plane of the configured camera.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.camera.viewport()
    }

    /// Configured camera.
    #[must_use]
    pub const fn camera(&self) -> Camera {
        self.camera
    }

    /// Scene-wide motion rules.
    #[must_use]
    pub const fn rules(&self) -> &MotionRules {
        &self.rules
    }

    /// Shared registry, read-only.
    #[must_use]
    pub const fn registry(&self) -> &SpatialRegistry {
        &self.registry
    }

    /// Cosmetic hints keyed by identity.
    #[must_use]
    pub const fn visuals(&self) -> &VisualCatalog {
        &self.visuals
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether the scene has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Identities in scene order.
    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.controllers.iter().map(WanderController::id)
    }

    /// Spec of the entity named `id`.
    #[must_use]
    pub fn spec(&self, id: &EntityId) -> Option<&ShapeSpec> {
        self.controllers
            .iter()
            .find(|c| c.id() == id)
            .map(WanderController::spec)
    }

    /// Current positions without advancing the simulation.
    #[must_use]
    pub fn positions(&self) -> Vec<(EntityId, Vec3)> {
        self.controllers
            .iter()
            .map(|c| (c.id().clone(), c.position()))
            .collect()
    }

    /// Advance every entity by one frame.
    ///
    /// `pointer` is in normalised device coordinates and is projected onto
    /// the entity plane using `viewport`. Entities later in scene order see
    /// positions already written this frame by earlier ones.
    pub fn tick(
        &mut self,
        tick: FrameTick,
        pointer: Option<PointerState>,
        viewport: Viewport,
    ) -> Vec<EntityFrame> {
        let pointer_world = pointer.map(|p| p.to_world(viewport));
        let elapsed = if tick.elapsed.is_finite() {
            tick.elapsed
        } else {
            0.0
        };
        let spin_clock = expect_f32(elapsed);
        let sanitised = FrameTick::new(elapsed, tick.delta);

        self.controllers
            .iter_mut()
            .map(|controller| {
                let position =
                    controller.advance(sanitised, pointer_world, &self.rules, &mut self.registry);
                EntityFrame {
                    id: controller.id().clone(),
                    position,
                    rotation: controller.spec().rotation_at(spin_clock),
                }
            })
            .collect()
    }

    /// Tear down the entity named `id`, dropping its registry entry and
    /// visual. Returns whether it existed.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let Some(index) = self.controllers.iter().position(|c| c.id() == id) else {
            return false;
        };
        let controller = self.controllers.remove(index);
        controller.retire(&mut self.registry);
        self.visuals.remove(id);
        debug!("removed {id} from scene");
        true
    }
}
