//! Hitscan damage scales by the zone the ray lands in: head 2x, body 1x,
//! legs 0.5x plus a movement slow.

mod common;

use glam::Vec3;

fn shoot(dummy: &str) -> (i32, bool) {
    let mut map = common::test_map();
    let shooter = common::spawn(&mut map, "Player", Vec3::new(2.0, 2.0, 0.0), 0.0);
    let target = common::spawn(&mut map, dummy, Vec3::new(4.0, 2.0, 0.0), 0.0);

    assert!(map.fire_weapon(shooter), "gun starts ready");
    let t = map.actor(target).expect("target alive");
    (t.health, t.is_slowed())
}

#[test]
fn head_hits_double() {
    assert_eq!(shoot("HeadDummy"), (80, false));
}

#[test]
fn body_hits_straight() {
    assert_eq!(shoot("BodyDummy"), (90, false));
}

#[test]
fn leg_hits_halve_and_slow() {
    assert_eq!(shoot("LegDummy"), (95, true));
}

#[test]
fn leg_slow_lasts_three_seconds() {
    let mut map = common::test_map();
    let shooter = common::spawn(&mut map, "Player", Vec3::new(2.0, 2.0, 0.0), 0.0);
    let target = common::spawn(&mut map, "LegDummy", Vec3::new(4.0, 2.0, 0.0), 0.0);

    assert!(map.fire_weapon(shooter));
    common::run_ticks(&mut map, 120, 1.0 / 60.0);
    assert!(map.actor(target).unwrap().is_slowed(), "slow holds at 2s");
    common::run_ticks(&mut map, 70, 1.0 / 60.0);
    assert!(!map.actor(target).unwrap().is_slowed(), "slow expired past 3s");
}

#[test]
fn ray_hits_spawn_the_weapon_hit_actor() {
    let mut map = common::test_map();
    let shooter = common::spawn(&mut map, "Player", Vec3::new(2.0, 2.0, 0.0), 0.0);
    common::spawn(&mut map, "BodyDummy", Vec3::new(4.0, 2.0, 0.0), 0.0);

    assert!(map.fire_weapon(shooter));
    assert!(map.live_actors().any(|a| a.def.name == "Splat"));
    assert!(!map.live_actors().any(|a| a.def.name == "Chip"));
}

#[test]
fn ray_misses_spawn_the_weapon_miss_actor() {
    let mut map = common::test_map();
    // Facing -X with nothing in the way; the ray ends on the west wall.
    let shooter = common::spawn(&mut map, "Player", Vec3::new(2.0, 2.0, 0.0), 180.0);

    assert!(map.fire_weapon(shooter));
    assert!(map.live_actors().any(|a| a.def.name == "Chip"));
    assert!(!map.live_actors().any(|a| a.def.name == "Splat"));
}

#[test]
fn refire_time_blocks_immediate_second_shot() {
    let mut map = common::test_map();
    let shooter = common::spawn(&mut map, "Player", Vec3::new(2.0, 2.0, 0.0), 0.0);
    let target = common::spawn(&mut map, "BodyDummy", Vec3::new(4.0, 2.0, 0.0), 0.0);

    assert!(map.fire_weapon(shooter));
    assert!(!map.fire_weapon(shooter), "still cooling down");
    assert_eq!(map.actor(target).unwrap().health, 90);

    // 0.5s refire; after that the trigger works again.
    common::run_ticks(&mut map, 31, 1.0 / 60.0);
    assert!(map.fire_weapon(shooter));
    assert_eq!(map.actor(target).unwrap().health, 80);
}
