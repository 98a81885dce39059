//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod weapons;

/// Register the weapon pipeline without physics or ships: type changes, firing and
/// the projectile pool. Enough for headless tests that only inspect components.
pub fn register_weapons(app: &mut App) {
    core::plugin(app);
    weapons::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register every gameplay plugin.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    player::plugin(app);
    weapons::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}
