//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: headless runtime loop with logging + gameplay plugins.
//! - `configure_headless`: same gameplay, no logging, for integration tests.
//!
//! Nothing here opens a window; rendering and input belong to the host game.

use bevy::asset::AssetPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use crate::common::state::GameState;
use crate::plugins;

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

/// Full configuration for `cargo run`-style hosts.
pub fn configure_full(app: &mut App) {
    // Avian's collider backend expects the asset + scene infrastructure.
    app.add_plugins((
        MinimalPlugins,
        LogPlugin::default(),
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    configure_game(app);
    info!("Weapon pipeline configured");
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - The caller adds `MinimalPlugins` / `StatesPlugin` itself.
/// - Do NOT add `LogPlugin`; the test harness may install its own subscriber.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
