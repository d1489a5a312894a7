#![cfg_attr(docsrs, feature(doc_cfg))]
//! Noise-driven floating shapes with soft collisions.
//!
//! Each entity wanders around a fixed anchor along a seeded gradient-noise
//! trajectory, is pushed apart from its neighbours and away from the pointer,
//! stays inside a bounded volume, and approaches its target with
//! frame-rate-independent smoothing. [`SceneDriver`] runs a whole scene;
//! [`WanderPlugin`] hosts it inside a Bevy app.
pub mod config;
pub mod constants;
pub mod controller;
pub mod entity;
pub mod logging;
pub mod noise;
pub mod numeric;
pub mod plugin;
pub mod pointer;
pub mod projects;
pub mod registry;
pub mod resolver;
pub mod scene;
pub mod seed;
pub mod smoothing;
pub mod vector_math;
pub mod visuals;
pub use constants::*;

// Re-export commonly used items
pub use config::{ConfigError, ShapeEntry, WanderSettings};
pub use controller::{FrameTick, MotionRules, WanderController};
pub use entity::{EntityId, RotationProfile, ShapeSpec, WanderConfig};
pub use logging::init as init_logging;
pub use noise::NoiseField;
pub use plugin::{PointerInput, ShapeTag, WanderPlugin};
pub use pointer::{Camera, PointerState, Viewport};
pub use projects::{fetch_projects, FetchError, Project, RepoSource};
pub use registry::{RegistryEntry, SpatialRegistry};
pub use resolver::Resolver;
pub use scene::{EntityFrame, SceneDriver, SceneError};
pub use smoothing::{Bounds, Smoother};
pub use visuals::{ShapeKind, Visual, VisualCatalog};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use wander::prelude::*;
    //! ```

    pub use crate::FrameTick;
    pub use crate::PointerState;
    pub use crate::SceneDriver;
    pub use crate::ShapeSpec;
    pub use crate::WanderSettings;
    pub use glam::{Vec2, Vec3};
}
