//! Projectiles plugin: the spawner side of the weapon pipeline.
//!
//! # Data flow
//! ```text
//!   Update (after WeaponSystems::Fire)
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │ allocate_projectiles_from_pool                                   │
//!   │   reads:   SpawnProjectileRequest messages                       │
//!   │   mutates: ProjectilePool.free, ProjectileState, Projectile,     │
//!   │            Transform, LinearVelocity, Visibility, CollisionLayers│
//!   └──────────────────────────────────────────────────────────────────┘
//!                 │
//!                 v
//!   FixedUpdate
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │ expire_projectiles → return_to_pool_commit                       │
//!   │   Active ──(lifetime over)──> PendingReturn ──> Inactive + free  │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The allocator is the single writer that pops from the pool; the commit is the
//! single writer that pushes back. Hit resolution is not handled here.

pub mod allocator;
pub mod commit;
pub mod components;
pub mod messages;
pub mod pool;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::weapons::WeaponSystems;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let capacity = app
            .world()
            .get_resource::<Tunables>()
            .map_or(Tunables::default().projectile_pool_capacity, |t| t.projectile_pool_capacity);

        app.init_resource::<Tunables>()
            .insert_resource(pool::ProjectilePool::new(capacity))
            .add_message::<messages::SpawnProjectileRequest>()
            .add_systems(Startup, pool::init_projectile_pool);

        app.add_systems(
            Update,
            allocator::allocate_projectiles_from_pool
                .after(WeaponSystems::Fire)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            (commit::expire_projectiles, commit::return_to_pool_commit)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
    }
}
