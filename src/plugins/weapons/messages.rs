//! Weapon intents.
//!
//! Both messages are external triggers: something else (input, AI, power-up pickup)
//! decides *when*; the weapon systems decide *whether* and *what*.

use bevy::prelude::*;

use super::definition::WeaponType;

/// Change the type of one weapon entity.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetWeaponType {
    pub weapon: Entity,
    pub kind: WeaponType,
}

/// Fire every weapon whose trigger source is `source`.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireWeapons {
    pub source: Entity,
}
