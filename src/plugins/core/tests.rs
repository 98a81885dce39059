use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core;
use crate::plugins::weapons::{WeaponTable, WeaponType};

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<WeaponTable>().is_some());
}

#[test]
fn keeps_preinserted_weapon_table() {
    let table = WeaponTable::from_ron("[(kind: Blaster, delay_between_shots: 1.5)]")
        .expect("valid table");

    let mut app = App::new();
    app.insert_resource(table);
    core::plugin(&mut app);

    let table = app.world().resource::<WeaponTable>();
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.lookup(WeaponType::Blaster).unwrap().delay_between_shots,
        1.5
    );
}
