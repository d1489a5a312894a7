//! Bevy plugin hosting the wander kernel inside an ECS application.
//!
//! `WanderPlugin` inserts a [`SceneDriver`] resource, spawns one ECS entity
//! per shape, and writes each frame's position and rotation back onto the
//! entity's `Transform`. The ECS side stays a passive observer: the driver is
//! the single source of truth for motion.

use bevy::prelude::*;
use hashbrown::HashMap;
use log::error;

use crate::config::WanderSettings;
use crate::controller::FrameTick;
use crate::entity::EntityId;
use crate::pointer::{PointerState, Viewport};
use crate::scene::{EntityFrame, SceneDriver};

/// Links an ECS entity to the kernel entity it renders.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ShapeTag(pub EntityId);

/// Latest host pointer, written by input systems and read once per frame.
///
/// `viewport` overrides the camera-derived plane size when the host already
/// knows it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// Pointer in normalised device coordinates; `None` while outside the
    /// window.
    pub state: Option<PointerState>,
    /// Visible plane in world units.
    pub viewport: Option<Viewport>,
}

/// Plugin installing the scene driver and its per-frame systems.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use wander::WanderPlugin;
///
/// App::new()
///     .add_plugins(MinimalPlugins)
///     .add_plugins(WanderPlugin::default())
///     .run();
/// ```
#[derive(Debug, Default, Clone)]
pub struct WanderPlugin {
    settings: WanderSettings,
}

impl WanderPlugin {
    /// Use `settings` instead of the built-in scene.
    #[must_use]
    pub const fn new(settings: WanderSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for WanderPlugin {
    fn build(&self, app: &mut App) {
        let driver = match SceneDriver::from_settings(&self.settings) {
            Ok(driver) => driver,
            Err(err) => {
                error!("wander scene not installed: {err}");
                return;
            }
        };
        app.insert_resource(driver);
        app.init_resource::<PointerInput>();
        app.add_systems(Startup, spawn_shapes_system);
        app.add_systems(Update, advance_shapes_system);

        #[cfg(feature = "render")]
        app.add_systems(Update, track_cursor_system.before(advance_shapes_system));
    }
}

/// Spawns one tagged, named entity per shape at its anchor.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn spawn_shapes_system(mut commands: Commands, driver: Res<SceneDriver>) {
    for (id, position) in driver.positions() {
        let label = driver
            .visuals()
            .get(&id)
            .map_or("Shape", |visual| visual.kind.label());
        let name = Name::new(format!("{label}:{id}"));
        commands.spawn((ShapeTag(id), Transform::from_translation(position), name));
    }
}

/// Advances the driver by the frame's timing and mirrors the result onto
/// tagged transforms.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn advance_shapes_system(
    time: Res<Time>,
    pointer: Res<PointerInput>,
    mut driver: ResMut<SceneDriver>,
    mut shapes: Query<(&ShapeTag, &mut Transform)>,
) {
    let viewport = pointer.viewport.unwrap_or_else(|| driver.viewport());
    let tick = FrameTick::new(time.elapsed_secs_f64(), time.delta_secs());
    let frames = driver.tick(tick, pointer.state, viewport);
    let by_id: HashMap<&EntityId, &EntityFrame> =
        frames.iter().map(|frame| (&frame.id, frame)).collect();

    for (tag, mut transform) in &mut shapes {
        let Some(frame) = by_id.get(&tag.0) else {
            continue;
        };
        transform.translation = frame.position;
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            frame.rotation.x,
            frame.rotation.y,
            frame.rotation.z,
        );
    }
}

/// Maps the primary window's cursor into [`PointerInput`].
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems receive queries by value."
)]
pub fn track_cursor_system(
    windows: Query<&bevy::window::Window, With<bevy::window::PrimaryWindow>>,
    mut pointer: ResMut<PointerInput>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    pointer.state = window
        .cursor_position()
        .and_then(|cursor| PointerState::from_window(cursor, size));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(WanderPlugin::default());
        app
    }

    fn tags(app: &mut App) -> Vec<(EntityId, Vec3)> {
        let world = app.world_mut();
        let mut query = world.query::<(&ShapeTag, &Transform)>();
        query
            .iter(world)
            .map(|(tag, transform)| (tag.0.clone(), transform.translation))
            .collect()
    }

    #[test]
    fn startup_spawns_one_entity_per_shape() {
        let mut app = app();
        app.update();
        assert_eq!(tags(&mut app).len(), 6);
    }

    #[test]
    fn transforms_follow_the_driver() {
        let mut app = app();
        for _ in 0..5 {
            app.update();
        }
        let positions: HashMap<EntityId, Vec3> = app
            .world()
            .resource::<SceneDriver>()
            .positions()
            .into_iter()
            .collect();
        for (id, translation) in tags(&mut app) {
            assert_eq!(positions.get(&id), Some(&translation));
        }
    }

    #[test]
    fn names_carry_the_shape_kind() {
        let mut app = app();
        app.update();
        let world = app.world_mut();
        let mut query = world.query::<(&ShapeTag, &Name)>();
        let torus = query
            .iter(world)
            .find(|(tag, _)| tag.0.as_str() == "torus")
            .map(|(_, name)| name.as_str().to_owned());
        assert_eq!(torus.as_deref(), Some("Torus:torus"));
    }

    #[test]
    fn pointer_input_defaults_to_absent() {
        let input = PointerInput::default();
        assert_eq!(input.state, None);
        assert_eq!(input.viewport, None);
    }
}
