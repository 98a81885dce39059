use bevy::prelude::*;

use crate::plugins::weapons::WeaponType;

use super::messages::{Side, SpawnProjectileRequest};

/// Marker for entities owned by the projectile pool.
#[derive(Component)]
pub struct PooledProjectile;

/// Pool membership newtype: only the pool hands these out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectileEntity(pub Entity);

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub side: Side,
    pub kind: WeaponType,
    pub damage: f32,
}

impl Projectile {
    pub const INACTIVE: Self = Self {
        side: Side::Player,
        kind: WeaponType::None,
        damage: 0.0,
    };

    #[inline]
    pub fn reset_for_fire(&mut self, req: &SpawnProjectileRequest) {
        self.side = req.side;
        self.kind = req.kind;
        self.damage = req.damage;
    }
}

/// Time left before an active projectile goes back to the pool.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Lifetime(pub Timer);
