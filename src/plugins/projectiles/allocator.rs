//! Spawn consumer: activate projectiles from the pool.
//!
//! # Fail-fast invariants
//! - The pool free list contains only pooled projectile entities.
//! - Therefore a popped entity must match the projectile query.
//!
//! A mismatch is a bug and we `expect()` on it. An empty pool is a capacity decision:
//! the request is dropped.

use std::f32::consts::FRAC_PI_2;

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{Lifetime, PooledProjectile, Projectile, ProjectileEntity, ProjectileState};
use super::messages::SpawnProjectileRequest;
use super::pool::{active_layers, ProjectilePool};

pub fn allocate_projectiles_from_pool(
    mut pool: ResMut<ProjectilePool>,
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut q: Query<
        (
            &mut ProjectileState,
            &mut Projectile,
            &mut Lifetime,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
            &mut Sprite,
        ),
        With<PooledProjectile>,
    >,
) {
    for req in reader.read() {
        let Some(ProjectileEntity(e)) = pool.pop_free() else {
            debug!("Projectile pool exhausted, dropping {:?} shot", req.kind);
            continue;
        };

        let (mut state, mut projectile, mut lifetime, mut tf, mut vel, mut vis, mut layers, mut sprite) =
            q.get_mut(e)
                .expect("ProjectilePool contained an entity missing pooled projectile components");

        *state = ProjectileState::Active;
        projectile.reset_for_fire(req);
        lifetime.reset();

        // Firing plane: depth is always 0.
        tf.translation = req.pos.extend(0.0);
        tf.rotation = if req.vel == Vec2::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_z(req.vel.to_angle() - FRAC_PI_2)
        };

        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_layers(req.side);
        sprite.color = req.color;
    }
}
