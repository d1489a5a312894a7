//! Per-entity wandering trajectory.
//!
//! A [`WanderController`] owns one entity's smoothed position and is the only
//! writer of that entity's registry entry. Each frame it samples three
//! independent noise fields, resolves collisions against the registry,
//! clamps into the world volume, smooths, and publishes the result.

use glam::{Vec2, Vec3};
use log::{debug, trace};

use crate::entity::{EntityId, ShapeSpec};
use crate::noise::NoiseField;
use crate::numeric::expect_f32;
use crate::registry::{RegistryEntry, SpatialRegistry};
use crate::resolver::Resolver;
use crate::seed::{Axis, AxisSeeds};
use crate::smoothing::{Bounds, Smoother};
use crate::{DEPTH_TIME_SCALE, DEPTH_WANDER_RANGE, NOISE_PHASE_X, NOISE_PHASE_Y, NOISE_PHASE_Z};

/// Timing of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Seconds since the scene started.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameTick {
    /// Create a frame tick.
    #[must_use]
    pub const fn new(elapsed: f64, delta: f32) -> Self {
        Self { elapsed, delta }
    }
}

/// Scene-wide rules every controller applies after sampling noise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionRules {
    /// Collision and pointer adjustments.
    pub resolver: Resolver,
    /// World volume.
    pub bounds: Bounds,
    /// Smoothing towards the clamped target.
    pub smoother: Smoother,
}

/// Drives one entity along its noise trajectory.
#[derive(Debug, Clone)]
pub struct WanderController {
    spec: ShapeSpec,
    seeds: AxisSeeds,
    noise_x: NoiseField,
    noise_y: NoiseField,
    noise_z: NoiseField,
    smoothed: Vec3,
}

impl WanderController {
    /// Create a controller at its anchor and register it in `registry`.
    pub fn new(spec: ShapeSpec, registry: &mut SpatialRegistry) -> Self {
        let seeds = AxisSeeds::for_identity(spec.id.as_str());
        let controller = Self {
            noise_x: NoiseField::new(seeds.seed(Axis::X)),
            noise_y: NoiseField::new(seeds.seed(Axis::Y)),
            noise_z: NoiseField::new(seeds.seed(Axis::Z)),
            smoothed: spec.base,
            seeds,
            spec,
        };
        controller.publish(registry);
        debug!(
            "created wander controller {} at {:?}",
            controller.spec.id, controller.spec.base
        );
        controller
    }

    /// Identity of the controlled entity.
    #[must_use]
    pub const fn id(&self) -> &EntityId {
        &self.spec.id
    }

    /// Fixed tuning the controller was created with.
    #[must_use]
    pub const fn spec(&self) -> &ShapeSpec {
        &self.spec
    }

    /// Current smoothed position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.smoothed
    }

    /// Noise-driven displacement from the anchor at `elapsed` seconds.
    ///
    /// X and Y span the wander range; depth drifts at half the time scale
    /// with a fixed, flatter amplitude.
    #[must_use]
    pub fn wander_offset(&self, elapsed: f64) -> Vec3 {
        let t = elapsed * f64::from(self.spec.wander.noise_time_scale);
        let range = self.spec.wander.wander_range;

        let nx = self
            .noise_x
            .sample(t + self.seeds.offset(Axis::X), NOISE_PHASE_X);
        let ny = self
            .noise_y
            .sample(t + self.seeds.offset(Axis::Y), NOISE_PHASE_Y);
        let nz = self
            .noise_z
            .sample(t * DEPTH_TIME_SCALE + self.seeds.offset(Axis::Z), NOISE_PHASE_Z);

        Vec3::new(
            expect_f32(nx) * range,
            expect_f32(ny) * range,
            expect_f32(nz) * DEPTH_WANDER_RANGE,
        )
    }

    /// Target before any collision, pointer, or bounds adjustment.
    #[must_use]
    pub fn candidate(&self, elapsed: f64) -> Vec3 {
        self.spec.base + self.wander_offset(elapsed)
    }

    /// Advance one frame and publish the new position to `registry`.
    ///
    /// `pointer` is in world units; pass `None` when the host has no pointer.
    pub fn advance(
        &mut self,
        tick: FrameTick,
        pointer: Option<Vec2>,
        rules: &MotionRules,
        registry: &mut SpatialRegistry,
    ) -> Vec3 {
        let candidate = self.candidate(tick.elapsed);
        let resolved = rules.resolver.resolve(
            candidate,
            &self.spec.id,
            self.spec.radius,
            registry,
            pointer,
        );
        let clamped = rules.bounds.clamp(resolved);
        self.smoothed = rules.smoother.step(self.smoothed, clamped, tick.delta);
        trace!(
            "{}: candidate {candidate:?} -> target {clamped:?} -> {:?}",
            self.spec.id,
            self.smoothed
        );
        self.publish(registry);
        self.smoothed
    }

    /// Remove this entity's registry entry and drop the controller.
    pub fn retire(self, registry: &mut SpatialRegistry) {
        registry.remove(&self.spec.id);
    }

    fn publish(&self, registry: &mut SpatialRegistry) {
        registry.upsert(
            &self.spec.id,
            RegistryEntry {
                position: self.smoothed,
                radius: self.spec.radius,
            },
        );
    }
}
