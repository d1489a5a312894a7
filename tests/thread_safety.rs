//! Compile-time checks that scene state can live in a multi-threaded host.

use static_assertions::assert_impl_all;
use wander::{EntityFrame, PointerInput, SceneDriver, SpatialRegistry, WanderController};

assert_impl_all!(SceneDriver: Send, Sync);
assert_impl_all!(SpatialRegistry: Send, Sync, Default);
assert_impl_all!(WanderController: Send, Sync, Clone);
assert_impl_all!(EntityFrame: Send, Sync, serde::Serialize);
assert_impl_all!(PointerInput: Send, Sync, Copy, Default);
