//! The weapon controller.
//!
//! `Weapon` is a component, but its rules are plain methods so they can be tested
//! without a `World`:
//! - `set_type` is the only way to change the type and keeps `kind` and `definition`
//!   paired (`definition` is `None` exactly when `kind` is `None`).
//! - `try_fire` / `try_fire_enemy` are the two fire gates. The cooldown is refreshed
//!   once per fire event, never per projectile.
//!
//! Structural side effects (hiding the weapon, swapping the model entity) are left to
//! the systems in `systems.rs`; the controller only reports what changed.

use std::sync::Arc;

use bevy::prelude::*;

use crate::plugins::projectiles::messages::{Side, SpawnProjectileRequest};

use super::definition::{WeaponDefinition, WeaponTable, WeaponType};
use super::error::WeaponError;
use super::pattern;

#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct Weapon {
    kind: WeaponType,
    definition: Option<Arc<WeaponDefinition>>,
    /// Game-clock time (seconds) before which the weapon refuses to fire.
    next_shot_time: f32,
    side: Side,
    /// Entity whose `FireWeapons` trigger this weapon answers to.
    source: Entity,
    model: Option<Entity>,
}

/// Outcome of a successful `set_type`.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeChange {
    /// Type set to `None`: hide the weapon.
    Deactivated,
    /// New definition resolved: show the weapon and attach this model.
    Equipped(Arc<WeaponDefinition>),
}

impl Weapon {
    pub fn new(side: Side, source: Entity) -> Self {
        Self {
            kind: WeaponType::None,
            definition: None,
            next_shot_time: 0.0,
            side,
            source,
            model: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> WeaponType {
        self.kind
    }

    #[inline]
    pub fn definition(&self) -> Option<&Arc<WeaponDefinition>> {
        self.definition.as_ref()
    }

    #[inline]
    pub fn next_shot_time(&self) -> f32 {
        self.next_shot_time
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn source(&self) -> Entity {
        self.source
    }

    #[inline]
    pub fn model(&self) -> Option<Entity> {
        self.model
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.kind != WeaponType::None
    }

    /// Switch to `kind`.
    ///
    /// On `UnknownType` nothing changes. A successful switch to a real type resets the
    /// cooldown to `now`, so the next trigger fires immediately.
    pub fn set_type(
        &mut self,
        kind: WeaponType,
        table: &WeaponTable,
        now: f32,
    ) -> Result<TypeChange, WeaponError> {
        if kind == WeaponType::None {
            self.kind = WeaponType::None;
            self.definition = None;
            return Ok(TypeChange::Deactivated);
        }

        let def = table.lookup(kind)?;
        self.kind = kind;
        self.definition = Some(def.clone());
        self.next_shot_time = now;
        Ok(TypeChange::Equipped(def))
    }

    /// Store the new model entity and hand back the previous one for release.
    pub fn replace_model(&mut self, model: Option<Entity>) -> Option<Entity> {
        std::mem::replace(&mut self.model, model)
    }

    #[inline]
    fn cooling_down(&self, now: f32) -> bool {
        now < self.next_shot_time
    }

    /// Player-side fire gate.
    ///
    /// Inactive or cooling down is not an error: the result is just empty.
    /// `EnemyWeapon` only fires through `try_fire_enemy`; here it is a no-op that
    /// leaves the cooldown alone.
    pub fn try_fire(
        &mut self,
        now: f32,
        anchor: Vec3,
    ) -> Result<Vec<SpawnProjectileRequest>, WeaponError> {
        if self.kind == WeaponType::EnemyWeapon {
            return Ok(Vec::new());
        }
        let Some(def) = self.definition.clone() else {
            return Ok(Vec::new());
        };
        if self.cooling_down(now) {
            return Ok(Vec::new());
        }

        let velocities = pattern::shot_velocities(self.kind, def.velocity, self.side.forward())?;
        self.next_shot_time = now + def.delay_between_shots;

        let pos = anchor.truncate();
        Ok(velocities
            .into_iter()
            .map(|vel| SpawnProjectileRequest {
                side: self.side,
                kind: self.kind,
                pos,
                vel,
                damage: def.damage_on_hit,
                color: def.projectile_color,
            })
            .collect())
    }

    /// Enemy-side fire gate: only an active `EnemyWeapon` fires, one shot straight down.
    pub fn try_fire_enemy(&mut self, now: f32, anchor: Vec3) -> Vec<SpawnProjectileRequest> {
        if self.kind != WeaponType::EnemyWeapon {
            return Vec::new();
        }
        let Some(enemy_def) = self.definition.clone() else {
            return Vec::new();
        };
        if self.cooling_down(now) {
            return Vec::new();
        }

        self.next_shot_time = now + enemy_def.delay_between_shots;
        vec![SpawnProjectileRequest {
            side: Side::Enemy,
            kind: WeaponType::EnemyWeapon,
            pos: anchor.truncate(),
            vel: Side::Enemy.forward() * enemy_def.velocity,
            damage: enemy_def.damage_on_hit,
            color: enemy_def.projectile_color,
        }]
    }
}

/// The visual model attached under a weapon. Replaced on every type change.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct WeaponModel {
    pub kind: WeaponType,
    /// Asset path from the definition; loading it is left to the renderer.
    pub asset: String,
}
