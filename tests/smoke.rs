mod common;

use bevy::prelude::*;
use shmup_weapons::plugins::player::Player;
use shmup_weapons::plugins::weapons::{FireWeapons, Weapon, WeaponModel, WeaponType};

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn player_weapon_is_armed_on_enter() {
    let mut app = common::app_headless();

    // OnEnter spawns the ship and queues the starting weapon; the next frame applies it.
    app.update();
    app.update();

    let weapon = app
        .world_mut()
        .query::<&Weapon>()
        .single(app.world())
        .expect("player weapon");
    assert_eq!(weapon.kind(), WeaponType::Blaster);

    let models = app
        .world_mut()
        .query::<&WeaponModel>()
        .iter(app.world())
        .count();
    assert_eq!(models, 1);
}

#[test]
fn player_trigger_spawns_projectile() {
    let mut app = common::app_headless();
    app.update();
    app.update();

    let player = app
        .world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .expect("player");

    app.world_mut().write_message(FireWeapons { source: player });
    app.update();

    assert_eq!(common::active_projectiles(&mut app), 1);
}
