//! Melee swings hit the nearest hostile inside range and arc, nothing else.

mod common;

use glam::Vec3;

#[test]
fn target_inside_arc_takes_the_hit() {
    let mut map = common::test_map();
    let grunt = common::spawn(&mut map, "Grunt", Vec3::new(2.0, 2.0, 0.0), 0.0);
    // Slightly off-axis but inside the 45 degree half-arc and within
    // melee_range + radius.
    let target = common::spawn(&mut map, "MarineDummy", Vec3::new(3.0, 2.3, 0.0), 0.0);

    assert!(map.fire_weapon(grunt));
    assert_eq!(map.actor(target).unwrap().health, 95);
}

#[test]
fn target_outside_arc_is_missed() {
    let mut map = common::test_map();
    let grunt = common::spawn(&mut map, "Grunt", Vec3::new(2.0, 2.0, 0.0), 0.0);
    // Due north: bearing 90 degrees, outside the 45 degree half-arc.
    let target = common::spawn(&mut map, "MarineDummy", Vec3::new(2.0, 3.0, 0.0), 0.0);

    assert!(map.fire_weapon(grunt), "swing still happens");
    assert_eq!(map.actor(target).unwrap().health, 100);
}

#[test]
fn target_out_of_reach_is_missed() {
    let mut map = common::test_map();
    let grunt = common::spawn(&mut map, "Grunt", Vec3::new(2.0, 2.0, 0.0), 0.0);
    let target = common::spawn(&mut map, "MarineDummy", Vec3::new(4.5, 2.0, 0.0), 0.0);

    assert!(map.fire_weapon(grunt));
    assert_eq!(map.actor(target).unwrap().health, 100);
}

#[test]
fn friendlies_are_never_clipped() {
    let mut map = common::test_map();
    let grunt = common::spawn(&mut map, "Grunt", Vec3::new(2.0, 2.0, 0.0), 0.0);
    let friend = common::spawn(&mut map, "DemonDummy", Vec3::new(2.8, 2.0, 0.0), 0.0);
    let foe = common::spawn(&mut map, "MarineDummy", Vec3::new(3.0, 2.0, 0.0), 0.0);

    assert!(map.fire_weapon(grunt));
    assert_eq!(map.actor(friend).unwrap().health, 100);
    assert_eq!(map.actor(foe).unwrap().health, 95);
}

#[test]
fn nearest_hostile_wins() {
    let mut map = common::test_map();
    let grunt = common::spawn(&mut map, "Grunt", Vec3::new(2.0, 2.0, 0.0), 0.0);
    let near = common::spawn(&mut map, "MarineDummy", Vec3::new(2.8, 2.0, 0.0), 0.0);
    let far = common::spawn(&mut map, "MarineDummy", Vec3::new(3.2, 2.0, 0.0), 0.0);

    assert!(map.fire_weapon(grunt));
    assert_eq!(map.actor(near).unwrap().health, 95);
    assert_eq!(map.actor(far).unwrap().health, 100);
}
