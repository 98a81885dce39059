//! Expiry + return commit: recycle projectiles back into the pool.
//!
//! `return_to_pool_commit` owns the *Inactive invariants*. Inactive projectiles are:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Lifetime, PooledProjectile, ProjectileEntity, ProjectileState};
use super::pool::{inactive_layers, ProjectilePool};

/// Tick active projectiles and mark the expired ones for return.
pub fn expire_projectiles(
    time: Res<Time>,
    mut q: Query<(&mut ProjectileState, &mut Lifetime), With<PooledProjectile>>,
) {
    for (mut state, mut lifetime) in &mut q {
        if *state != ProjectileState::Active {
            continue;
        }

        lifetime.tick(time.delta());
        if lifetime.is_finished() {
            *state = ProjectileState::PendingReturn;
        }
    }
}

pub fn return_to_pool_commit(
    mut pool: ResMut<ProjectilePool>,
    mut q: Query<
        (
            Entity,
            &mut ProjectileState,
            &mut Visibility,
            &mut LinearVelocity,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != ProjectileState::PendingReturn {
            continue;
        }

        *state = ProjectileState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_layers();

        pool.push_free(ProjectileEntity(e));
    }
}
