//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - the game clock is frozen (`ManualDuration(ZERO)`) so cooldowns only move
//!   when a test says so.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use shmup_weapons::common::state::GameState;

/// Full gameplay: physics, player ship, weapons, projectile pool.
pub fn app_headless() -> App {
    let mut app = App::new();

    // Avian's collider backend wants the asset + scene infrastructure.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));

    shmup_weapons::game::configure_headless(&mut app);
    app
}

/// Weapons + projectile pool only; no physics, no ships.
pub fn app_weapons_only() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    app.init_state::<GameState>();

    shmup_weapons::plugins::register_weapons(&mut app);
    app
}

pub fn active_projectiles(app: &mut App) -> usize {
    use shmup_weapons::plugins::projectiles::components::ProjectileState;

    app.world_mut()
        .query::<&ProjectileState>()
        .iter(app.world())
        .filter(|s| **s == ProjectileState::Active)
        .count()
}
