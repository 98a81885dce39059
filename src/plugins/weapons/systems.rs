use bevy::prelude::*;

use crate::plugins::projectiles::messages::{Side, SpawnProjectileRequest};

use super::definition::WeaponTable;
use super::messages::{FireWeapons, SetWeaponType};
use super::weapon::{TypeChange, Weapon, WeaponModel};

const MODEL_SIZE: f32 = 12.0;

/// Spawn an inactive weapon under `source`. It answers to `FireWeapons { source }`.
///
/// The weapon starts as `WeaponType::None`; send `SetWeaponType` to arm it.
pub fn spawn_weapon(commands: &mut Commands, source: Entity, side: Side, offset: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Weapon"),
            Weapon::new(side, source),
            Transform::from_translation(offset.extend(0.0)),
            Visibility::Hidden,
            ChildOf(source),
        ))
        .id()
}

/// Apply `SetWeaponType` messages.
///
/// The old model is despawned before the new one is spawned, so rapid switching never
/// leaves more than one model under a weapon.
pub fn apply_weapon_type_changes(
    mut commands: Commands,
    time: Res<Time>,
    table: Res<WeaponTable>,
    mut reader: MessageReader<SetWeaponType>,
    mut q: Query<(&mut Weapon, &mut Visibility)>,
) {
    let now = time.elapsed_secs();

    for req in reader.read() {
        let Ok((mut weapon, mut vis)) = q.get_mut(req.weapon) else {
            debug!("SetWeaponType target {:?} is not a weapon", req.weapon);
            continue;
        };

        match weapon.set_type(req.kind, &table, now) {
            Ok(TypeChange::Deactivated) => {
                *vis = Visibility::Hidden;
            }
            Ok(TypeChange::Equipped(def)) => {
                *vis = Visibility::Inherited;

                // The old model may only be reserved if it was spawned earlier in this
                // batch; queued commands apply in order, so the despawn still lands.
                if let Some(old) = weapon.replace_model(None) {
                    commands.entity(old).despawn();
                }

                let model = commands
                    .spawn((
                        Name::new(format!("WeaponModel({:?})", def.kind)),
                        WeaponModel { kind: def.kind, asset: def.model.clone() },
                        Sprite::from_color(def.power_up_color, Vec2::splat(MODEL_SIZE)),
                        Transform::IDENTITY,
                        ChildOf(req.weapon),
                    ))
                    .id();
                weapon.replace_model(Some(model));
            }
            Err(err) => {
                warn!("Rejected type change on weapon {:?}: {err}", req.weapon);
            }
        }
    }
}

/// Consume `FireWeapons` triggers and write the resulting spawn requests.
///
/// Player weapons go through `try_fire`, enemy weapons through `try_fire_enemy`.
pub fn fire_weapons(
    time: Res<Time>,
    mut triggers: MessageReader<FireWeapons>,
    mut q: Query<(Entity, &mut Weapon, &GlobalTransform)>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    let now = time.elapsed_secs();

    for trigger in triggers.read() {
        for (e, mut weapon, tf) in &mut q {
            if weapon.source() != trigger.source {
                continue;
            }

            let anchor = tf.translation();
            let shots = match weapon.side() {
                Side::Player => match weapon.try_fire(now, anchor) {
                    Ok(shots) => shots,
                    Err(err) => {
                        warn!("Weapon {e:?} did not fire: {err}");
                        continue;
                    }
                },
                Side::Enemy => weapon.try_fire_enemy(now, anchor),
            };

            if !shots.is_empty() {
                debug!("Weapon {e:?} fired {} projectile(s)", shots.len());
            }
            writer.write_batch(shots);
        }
    }
}
