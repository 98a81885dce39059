//! Core plugin: shared resources and global settings.
//!
//! Uses `init_resource` so an app can pre-insert its own `Tunables` or a
//! `WeaponTable` loaded with `WeaponTable::from_ron`.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::weapons::WeaponTable;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.init_resource::<WeaponTable>();
}

#[cfg(test)]
mod tests;
