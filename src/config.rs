//! Layered configuration for scenes and the project feed.
//!
//! Settings resolve in three layers: built-in defaults, an optional TOML
//! file, then `WANDER_`-prefixed environment variables with `__` separating
//! nested keys (`WANDER_BOUNDS__X=5`).

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use glam::Vec3;
use hashbrown::HashSet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controller::MotionRules;
use crate::entity::{EntityId, ShapeSpec, WanderConfig};
use crate::pointer::Camera;
use crate::projects::ProjectCatalog;
use crate::resolver::{CollisionSettings, RepulsionSettings, Resolver};
use crate::smoothing::{Bounds, Smoother};
use crate::visuals::{ShapeKind, Visual, VisualCatalog};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "WANDER_";

const PRIMARY: &str = "#047857";
const SECONDARY: &str = "#10b981";
const MUTED: &str = "#065f46";

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested configuration file does not exist.
    #[error("configuration file {} not found", .0.display())]
    MissingFile(PathBuf),
    /// A provider produced data that does not fit the settings schema.
    #[error("failed to extract settings: {0}")]
    Extract(#[from] Box<figment::Error>),
    /// The world volume is empty or inverted.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
    /// A shape entry carries unusable tuning.
    #[error("invalid shape `{id}`: {reason}")]
    InvalidShape {
        /// Offending identity.
        id: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Two shape entries share an identity.
    #[error("duplicate shape identity `{0}`")]
    DuplicateShape(EntityId),
    /// Collision or pointer tuning is negative or not finite.
    #[error("invalid {setting}: {value}")]
    InvalidTuning {
        /// Dotted path of the offending setting.
        setting: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// The smoothing residual lies outside `(0, 1)`.
    #[error("smoothing residual {0} must lie strictly between 0 and 1")]
    InvalidSmoothing(f32),
}

/// One configured shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    /// Identity, unique within the scene.
    pub id: String,
    /// Anchor position.
    pub base: Vec3,
    /// Collision radius.
    pub radius: f32,
    /// Noise time multiplier.
    pub noise_time_scale: f32,
    /// Maximum X/Y drift.
    pub wander_range: f32,
    /// Cosmetic spin multiplier.
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
    /// Geometry for the renderer; also selects the spin profile.
    pub kind: ShapeKind,
    /// Hex colour for the renderer.
    pub color: String,
}

const fn default_rotation_speed() -> f32 {
    1.0
}

impl ShapeEntry {
    #[expect(
        clippy::too_many_arguments,
        reason = "Mirrors the columns of the default scene table."
    )]
    fn new(
        id: &str,
        base: [f32; 3],
        radius: f32,
        noise_time_scale: f32,
        wander_range: f32,
        rotation_speed: f32,
        kind: ShapeKind,
        color: &str,
    ) -> Self {
        Self {
            id: id.to_owned(),
            base: Vec3::from_array(base),
            radius,
            noise_time_scale,
            wander_range,
            rotation_speed,
            kind,
            color: color.to_owned(),
        }
    }

    /// Kernel-facing spec for this entry.
    #[must_use]
    pub fn to_spec(&self) -> ShapeSpec {
        ShapeSpec {
            id: EntityId::new(self.id.clone()),
            base: self.base,
            radius: self.radius,
            wander: WanderConfig {
                noise_time_scale: self.noise_time_scale,
                wander_range: self.wander_range,
            },
            rotation_speed: self.rotation_speed,
            rotation: self.kind.rotation_profile(),
        }
    }

    /// Renderer-facing visual for this entry.
    #[must_use]
    pub fn to_visual(&self) -> Visual {
        Visual {
            kind: self.kind,
            color: self.color.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidShape {
            id: self.id.clone(),
            reason: reason.to_owned(),
        };
        if self.id.trim().is_empty() {
            return Err(invalid("identity must not be empty"));
        }
        if !self.base.is_finite() {
            return Err(invalid("base position must be finite"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(invalid("radius must be positive"));
        }
        if !(self.wander_range.is_finite() && self.wander_range >= 0.0) {
            return Err(invalid("wander range must not be negative"));
        }
        if !(self.noise_time_scale.is_finite() && self.noise_time_scale >= 0.0) {
            return Err(invalid("noise time scale must not be negative"));
        }
        if !self.rotation_speed.is_finite() {
            return Err(invalid("rotation speed must be finite"));
        }
        Ok(())
    }
}

static DEFAULT_SHAPES: Lazy<Vec<ShapeEntry>> = Lazy::new(|| {
    vec![
        ShapeEntry::new("sphere", [2.5, 1.5, -3.0], 1.2, 0.15, 2.0, 0.8, ShapeKind::Sphere, PRIMARY),
        ShapeEntry::new("torus", [-3.0, -1.0, -4.0], 1.5, 0.2, 2.5, 0.6, ShapeKind::Torus, SECONDARY),
        ShapeEntry::new("octahedron", [3.0, -1.0, -5.0], 1.2, 0.25, 2.8, 0.7, ShapeKind::Octahedron, PRIMARY),
        ShapeEntry::new("box", [-2.5, 2.0, -3.5], 1.0, 0.12, 1.8, 0.5, ShapeKind::Box, MUTED),
        ShapeEntry::new("smallSphere", [0.5, 2.5, -5.0], 0.5, 0.3, 2.5, 1.2, ShapeKind::SmallSphere, SECONDARY),
        ShapeEntry::new(
            "smallOctahedron",
            [-1.0, -2.5, -4.5],
            0.6,
            0.22,
            2.2,
            1.0,
            ShapeKind::SmallOctahedron,
            PRIMARY,
        ),
    ]
});

/// The six-shape scene used when no shapes are configured.
#[must_use]
pub fn default_shapes() -> Vec<ShapeEntry> {
    DEFAULT_SHAPES.clone()
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderSettings {
    /// World volume.
    pub bounds: Bounds,
    /// Pairwise collision tuning.
    pub collision: CollisionSettings,
    /// Pointer repulsion tuning.
    pub pointer: RepulsionSettings,
    /// Position smoothing.
    pub smoothing: Smoother,
    /// Camera used to project the pointer.
    pub camera: Camera,
    /// Shapes in the scene.
    pub shapes: Vec<ShapeEntry>,
    /// Project feed settings.
    pub projects: ProjectCatalog,
}

impl Default for WanderSettings {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            collision: CollisionSettings::default(),
            pointer: RepulsionSettings::default(),
            smoothing: Smoother::default(),
            camera: Camera::default(),
            shapes: default_shapes(),
            projects: ProjectCatalog::default(),
        }
    }
}

impl WanderSettings {
    /// Load settings from defaults, an optional TOML file, and the
    /// environment, then validate them.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingFile`] when `path` does not exist,
    /// [`ConfigError::Extract`] when a layer does not match the schema, and
    /// any error from [`WanderSettings::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = path {
            if !file.exists() {
                return Err(ConfigError::MissingFile(file.to_path_buf()));
            }
            figment = figment.merge(Toml::file(file));
        }
        let settings: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings describe a usable scene.
    ///
    /// # Errors
    /// Returns the first problem found: non-finite, inverted or empty
    /// bounds, negative or non-finite collision and pointer tuning, a
    /// residual outside `(0, 1)`, an invalid shape, or duplicate identities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Bounds { x, y, z_min, z_max } = self.bounds;
        if ![x, y, z_min, z_max].iter().all(|limit| limit.is_finite()) {
            return Err(ConfigError::InvalidBounds(format!(
                "limits must be finite (x = {x}, y = {y}, z_min = {z_min}, z_max = {z_max})"
            )));
        }
        if !(x > 0.0 && y > 0.0) {
            return Err(ConfigError::InvalidBounds(format!(
                "half extents must be positive (x = {x}, y = {y})"
            )));
        }
        if !(z_min < z_max) {
            return Err(ConfigError::InvalidBounds(format!(
                "z_min ({z_min}) must be below z_max ({z_max})"
            )));
        }
        let tuning = [
            ("collision.margin", self.collision.margin),
            ("collision.push_factor", self.collision.push_factor),
            ("pointer.radius", self.pointer.radius),
            ("pointer.strength", self.pointer.strength),
        ];
        for (setting, value) in tuning {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidTuning { setting, value });
            }
        }
        let residual = self.smoothing.residual;
        if !(residual > 0.0 && residual < 1.0) {
            return Err(ConfigError::InvalidSmoothing(residual));
        }

        let mut seen = HashSet::new();
        for shape in &self.shapes {
            shape.validate()?;
            if !seen.insert(shape.id.as_str()) {
                return Err(ConfigError::DuplicateShape(EntityId::new(shape.id.clone())));
            }
        }
        Ok(())
    }

    /// Scene-wide motion rules.
    #[must_use]
    pub const fn rules(&self) -> MotionRules {
        MotionRules {
            resolver: Resolver {
                collision: self.collision,
                repulsion: self.pointer,
            },
            bounds: self.bounds,
            smoother: self.smoothing,
        }
    }

    /// Kernel specs for every configured shape, in configuration order.
    #[must_use]
    pub fn shape_specs(&self) -> Vec<ShapeSpec> {
        self.shapes.iter().map(ShapeEntry::to_spec).collect()
    }

    /// Visual lookup for every configured shape.
    #[must_use]
    pub fn visuals(&self) -> VisualCatalog {
        let mut catalog = VisualCatalog::default();
        for shape in &self.shapes {
            catalog.insert(EntityId::new(shape.id.clone()), shape.to_visual());
        }
        catalog
    }
}
