//! Player plugin: the ship that owns the player's weapon.
//!
//! The ship is only a trigger source here. It spawns with one weapon child and asks
//! for `Tunables::starting_weapon` through `SetWeaponType`, the same path a power-up
//! pickup would take. Movement and input live outside this crate.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::projectiles::messages::Side;
use crate::plugins::weapons::{spawn_weapon, SetWeaponType};

#[derive(Component)]
pub struct Player;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn);
}

fn spawn(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut writer: MessageWriter<SetWeaponType>,
) {
    let layers = CollisionLayers::new(
        Layer::Player,
        [Layer::World, Layer::Enemy, Layer::EnemyProjectile],
    );

    let ship = commands
        .spawn((
            Name::new("Player"),
            Player,
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::splat(26.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            RigidBody::Kinematic,
            Collider::circle(13.0),
            layers,
            LinearVelocity::ZERO,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    let weapon = spawn_weapon(&mut commands, ship, Side::Player, tunables.muzzle_offset);
    writer.write(SetWeaponType {
        weapon,
        kind: tunables.starting_weapon,
    });
}
