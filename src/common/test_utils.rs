//! Test helpers.
//!
//! `World::run_system_once` (via `RunSystemOnce`) runs a system without building a schedule.
//! Systems that use `Commands` only enqueue structural changes, so we `flush()` before
//! handing the world back to the assertions.

use std::time::Duration;

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Move the generic game clock to `secs` (inserting it if missing).
pub fn set_elapsed(world: &mut World, secs: f32) {
    if world.get_resource::<Time>().is_none() {
        world.insert_resource(Time::<()>::default());
    }
    world
        .resource_mut::<Time>()
        .advance_to(Duration::from_secs_f32(secs));
}

/// Take every message of type `M` currently buffered in the world.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}
