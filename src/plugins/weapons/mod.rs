//! Weapons plugin: type selection, cooldown gating and firing patterns.
//!
//! # Data flow
//! ```text
//!   Update (GameState::InGame)
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │ (A) apply_weapon_type_changes                                    │
//!   │     reads:  SetWeaponType, WeaponTable, Time                     │
//!   │     writes: Weapon (kind/definition/cooldown), Visibility,       │
//!   │             WeaponModel child (despawn old → spawn new)          │
//!   │                                                                  │
//!   │ (B) fire_weapons                                                 │
//!   │     reads:  FireWeapons, GlobalTransform, Time                   │
//!   │     writes: Weapon cooldown, SpawnProjectileRequest              │
//!   └──────────────────────────────────────────────────────────────────┘
//!                 │
//!                 v
//!   projectiles::allocate_projectiles_from_pool
//! ```
//!
//! Who sends `FireWeapons` (input, AI) is not this module's concern.

pub mod definition;
pub mod error;
pub mod messages;
pub mod pattern;
pub mod systems;
pub mod weapon;

pub use definition::{WeaponDefinition, WeaponTable, WeaponType};
pub use error::WeaponError;
pub use messages::{FireWeapons, SetWeaponType};
pub use systems::spawn_weapon;
pub use weapon::{TypeChange, Weapon, WeaponModel};

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::projectiles::messages::SpawnProjectileRequest;

/// System sets so other plugins can order against weapon firing.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeaponSystems {
    ApplyTypeChanges,
    Fire,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<WeaponTable>()
        .add_message::<SetWeaponType>()
        .add_message::<FireWeapons>()
        .add_message::<SpawnProjectileRequest>();

    app.configure_sets(
        Update,
        (WeaponSystems::ApplyTypeChanges, WeaponSystems::Fire)
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        Update,
        (
            systems::apply_weapon_type_changes.in_set(WeaponSystems::ApplyTypeChanges),
            systems::fire_weapons.in_set(WeaponSystems::Fire),
        ),
    );
}
