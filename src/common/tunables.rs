//! Tunable gameplay constants.

use bevy::prelude::*;

use crate::plugins::weapons::WeaponType;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    /// Pre-spawned projectiles; requests beyond this are dropped.
    pub projectile_pool_capacity: usize,
    pub projectile_lifetime_secs: f32,
    pub starting_weapon: WeaponType,
    /// Firing anchor, relative to the owning ship.
    pub muzzle_offset: Vec2,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            projectile_pool_capacity: 512,
            projectile_lifetime_secs: 3.0,
            starting_weapon: WeaponType::Blaster,
            muzzle_offset: Vec2::new(0.0, 18.0),
        }
    }
}
