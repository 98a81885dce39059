//! Buffered spawn requests.
//!
//! Weapons never touch the projectile pool. They only write *intent*
//! (`SpawnProjectileRequest`) and the allocator applies it:
//! producer → queue → consumer.

use bevy::prelude::*;

use crate::plugins::weapons::WeaponType;

/// Which faction a weapon or projectile belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Player,
    Enemy,
}

impl Side {
    /// Travel direction of this side's shots: player up, enemy down.
    #[inline]
    pub fn forward(self) -> Vec2 {
        match self {
            Side::Player => Vec2::Y,
            Side::Enemy => Vec2::NEG_Y,
        }
    }
}

#[derive(Message, Clone, Debug, PartialEq)]
pub struct SpawnProjectileRequest {
    pub side: Side,
    pub kind: WeaponType,
    /// Firing anchor on the firing plane (depth is always 0).
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: f32,
    pub color: Color,
}
