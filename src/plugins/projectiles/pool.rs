//! Projectile pool: pre-spawned entities toggled by component values only.
//!
//! Inactive projectiles keep their physics components but collide with nothing
//! (empty filters), so activating one never moves it between archetypes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;

use super::components::{Lifetime, PooledProjectile, Projectile, ProjectileEntity, ProjectileState};
use super::messages::Side;

const PROJECTILE_SIZE: f32 = 6.0;

#[derive(Resource, Debug)]
pub struct ProjectilePool {
    free: Vec<ProjectileEntity>,
    capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<ProjectileEntity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: ProjectileEntity) {
        self.free.push(e);
    }
}

#[inline]
pub fn active_layers(side: Side) -> CollisionLayers {
    match side {
        Side::Player => CollisionLayers::new(Layer::PlayerProjectile, [Layer::World, Layer::Enemy]),
        Side::Enemy => CollisionLayers::new(Layer::EnemyProjectile, [Layer::World, Layer::Player]),
    }
}

/// Empty filters: collides with nothing.
#[inline]
pub fn inactive_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerProjectile, [] as [Layer; 0])
}

/// Pre-spawn `capacity` inactive projectiles.
pub fn init_projectile_pool(
    mut commands: Commands,
    mut pool: ResMut<ProjectilePool>,
    tunables: Res<Tunables>,
) {
    pool.free.clear();
    let cap = pool.capacity;
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                PooledProjectile,
                ProjectileState::Inactive,
                Projectile::INACTIVE,
                Lifetime(Timer::from_seconds(tunables.projectile_lifetime_secs, TimerMode::Once)),
                Sprite {
                    color: Color::WHITE,
                    custom_size: Some(Vec2::splat(PROJECTILE_SIZE)),
                    ..default()
                },
                Transform::default(),
                Visibility::Hidden,
                RigidBody::Kinematic,
                Collider::circle(PROJECTILE_SIZE * 0.5),
                inactive_layers(),
                LinearVelocity(Vec2::ZERO),
            ))
            .id();

        pool.free.push(ProjectileEntity(e));
    }

    debug!("Projectile pool ready with {cap} entities");
}
