//! Weapon definitions and the lookup table.
//!
//! A `WeaponDefinition` is plain data: what a weapon looks like and how its shots fly.
//! The `WeaponTable` owns one definition per `WeaponType` and hands out shared
//! `Arc`s, so a weapon holds a reference into the table instead of a private copy.
//! The table is validated once when it is built and never mutated afterwards.

use std::sync::Arc;

use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use serde::Deserialize;

use super::error::WeaponError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum WeaponType {
    /// No weapon; the weapon is hidden and never fires.
    #[default]
    None,
    Blaster,
    /// Three shots in a 20° fan.
    Spread,
    /// A dense 19-shot fan.
    Phaser,
    /// Listed as damage-over-time, fires like a blaster.
    Laser,
    /// No firing pattern.
    Missile,
    /// Power-up only (raises shield level), no firing pattern.
    Shield,
    EnemyWeapon,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeaponDefinition {
    pub kind: WeaponType,
    /// Letter shown on the power-up cube.
    pub letter: String,
    pub power_up_color: Color,
    pub projectile_color: Color,
    /// Damage of a single projectile hit.
    pub damage_on_hit: f32,
    /// Laser damage rate. Carried, not applied.
    pub damage_per_sec: f32,
    /// Seconds between two fire events.
    pub delay_between_shots: f32,
    /// Speed of every projectile, in world units per second.
    pub velocity: f32,
    /// Asset path of the model attached to the ship.
    pub model: String,
    /// Asset path of the projectile.
    pub projectile: String,
}

impl Default for WeaponDefinition {
    fn default() -> Self {
        Self {
            kind: WeaponType::None,
            letter: String::new(),
            power_up_color: Color::WHITE,
            projectile_color: Color::WHITE,
            damage_on_hit: 0.0,
            damage_per_sec: 0.0,
            delay_between_shots: 0.0,
            velocity: 50.0,
            model: String::new(),
            projectile: String::new(),
        }
    }
}

impl WeaponDefinition {
    fn validate(&self) -> Result<(), WeaponError> {
        let invalid = |reason| WeaponError::InvalidDefinition { kind: self.kind, reason };

        if self.kind == WeaponType::None {
            return Err(invalid("`None` cannot have a definition"));
        }
        if self.delay_between_shots.is_nan() || self.delay_between_shots < 0.0 {
            return Err(invalid("delay_between_shots must be >= 0"));
        }
        if self.velocity.is_nan() || self.velocity < 0.0 {
            return Err(invalid("velocity must be >= 0"));
        }
        Ok(())
    }
}

/// Read-only lookup from weapon type to definition.
#[derive(Resource, Debug, Clone)]
pub struct WeaponTable {
    definitions: HashMap<WeaponType, Arc<WeaponDefinition>>,
}

impl WeaponTable {
    /// Build a table, rejecting duplicates and out-of-range values.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = WeaponDefinition>,
    ) -> Result<Self, WeaponError> {
        let mut map = HashMap::default();
        for def in definitions {
            def.validate()?;
            let kind = def.kind;
            if map.insert(kind, Arc::new(def)).is_some() {
                return Err(WeaponError::DuplicateDefinition(kind));
            }
        }
        Ok(Self { definitions: map })
    }

    /// Parse a RON list of definitions, e.g.
    ///
    /// ```ron
    /// [
    ///     (kind: Blaster, letter: "B", delay_between_shots: 0.2, velocity: 50.0),
    /// ]
    /// ```
    pub fn from_ron(source: &str) -> Result<Self, WeaponError> {
        let definitions: Vec<WeaponDefinition> = ron::from_str(source)?;
        Self::from_definitions(definitions)
    }

    pub fn lookup(&self, kind: WeaponType) -> Result<Arc<WeaponDefinition>, WeaponError> {
        self.definitions
            .get(&kind)
            .cloned()
            .ok_or(WeaponError::UnknownType(kind))
    }

    /// Letter and color of the power-up cube for `kind`.
    pub fn power_up(&self, kind: WeaponType) -> Option<(&str, Color)> {
        self.definitions
            .get(&kind)
            .map(|def| (def.letter.as_str(), def.power_up_color))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for WeaponTable {
    fn default() -> Self {
        let builtin = [
            WeaponDefinition {
                kind: WeaponType::Blaster,
                letter: "B".into(),
                power_up_color: Color::srgb(0.2, 0.8, 1.0),
                projectile_color: Color::srgb(1.0, 0.85, 0.3),
                damage_on_hit: 1.0,
                delay_between_shots: 0.2,
                velocity: 50.0,
                model: "weapons/blaster.png".into(),
                projectile: "projectiles/hero.png".into(),
                ..default()
            },
            WeaponDefinition {
                kind: WeaponType::Spread,
                letter: "S".into(),
                power_up_color: Color::srgb(0.2, 1.0, 0.3),
                projectile_color: Color::srgb(0.4, 1.0, 0.4),
                damage_on_hit: 1.0,
                delay_between_shots: 0.4,
                velocity: 50.0,
                model: "weapons/spread.png".into(),
                projectile: "projectiles/hero.png".into(),
                ..default()
            },
            WeaponDefinition {
                kind: WeaponType::Phaser,
                letter: "P".into(),
                power_up_color: Color::srgb(1.0, 0.3, 1.0),
                projectile_color: Color::srgb(0.9, 0.4, 1.0),
                damage_on_hit: 0.5,
                delay_between_shots: 0.6,
                velocity: 40.0,
                model: "weapons/phaser.png".into(),
                projectile: "projectiles/hero.png".into(),
                ..default()
            },
            WeaponDefinition {
                kind: WeaponType::Laser,
                letter: "L".into(),
                power_up_color: Color::srgb(1.0, 0.2, 0.2),
                projectile_color: Color::srgb(1.0, 0.3, 0.3),
                damage_on_hit: 2.0,
                damage_per_sec: 10.0,
                delay_between_shots: 0.1,
                velocity: 80.0,
                model: "weapons/laser.png".into(),
                projectile: "projectiles/laser.png".into(),
                ..default()
            },
            WeaponDefinition {
                kind: WeaponType::EnemyWeapon,
                letter: "E".into(),
                projectile_color: Color::srgb(1.0, 0.5, 0.1),
                damage_on_hit: 1.0,
                delay_between_shots: 1.0,
                velocity: 30.0,
                model: "weapons/enemy.png".into(),
                projectile: "projectiles/enemy.png".into(),
                ..default()
            },
        ];

        Self::from_definitions(builtin).expect("built-in weapon table is valid")
    }
}
