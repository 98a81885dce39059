//! Firing patterns: a pure function of weapon type and definition.
//!
//! A pattern is a list of angle offsets in degrees. Every shot starts from the same
//! base velocity (`forward * speed`) rotated by its offset around the firing-plane
//! normal. Positive offsets turn clockwise, so `+10` tilts an upward shot towards +x.

use bevy::prelude::*;

use super::definition::WeaponType;
use super::error::WeaponError;

const SINGLE: [f32; 1] = [0.0];

const SPREAD: [f32; 3] = [0.0, 10.0, -10.0];

// 1° steps out to ±6, then ±8..±10. ±7 is skipped.
const PHASER: [f32; 19] = [
    0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -8.0, -9.0, -10.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0,
    8.0, 9.0, 10.0,
];

pub fn angle_offsets(kind: WeaponType) -> Result<&'static [f32], WeaponError> {
    match kind {
        WeaponType::Blaster | WeaponType::Laser | WeaponType::EnemyWeapon => Ok(&SINGLE),
        WeaponType::Spread => Ok(&SPREAD),
        WeaponType::Phaser => Ok(&PHASER),
        WeaponType::None | WeaponType::Missile | WeaponType::Shield => {
            Err(WeaponError::PatternNotImplemented(kind))
        }
    }
}

/// Rotate `base` clockwise by `degrees` in the firing plane.
#[inline]
pub fn rotate_clockwise(base: Vec2, degrees: f32) -> Vec2 {
    Rot2::degrees(-degrees) * base
}

/// Velocities of every shot of one fire event, in pattern order.
pub fn shot_velocities(
    kind: WeaponType,
    speed: f32,
    forward: Vec2,
) -> Result<Vec<Vec2>, WeaponError> {
    let base = forward * speed;
    Ok(angle_offsets(kind)?
        .iter()
        .map(|&deg| rotate_clockwise(base, deg))
        .collect())
}
