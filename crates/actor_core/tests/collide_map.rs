//! Actor-vs-world resolution: wall push-out, floor clamp, projectile death.

mod common;

use glam::Vec3;

#[test]
fn walker_cannot_penetrate_walls() {
    let mut map = common::test_map();
    let h = common::spawn(&mut map, "Player", Vec3::new(1.5, 1.5, 0.0), 0.0);

    // Shove west into the border wall for a second.
    for _ in 0..60 {
        if let Some(a) = map.actor_mut(h) {
            a.move_in_direction(Vec3::NEG_X, 2.0);
        }
        map.update(1.0 / 60.0, &mut []);
    }
    let a = map.actor(h).expect("still alive");
    // Wall face at x=1; the disc center stays a radius away.
    assert!(
        a.position.x >= 1.0 + a.radius() - 1e-3,
        "pushed into wall: x={}",
        a.position.x
    );
}

#[test]
fn overlapping_wall_resolves_to_contact() {
    let mut map = common::test_map();
    let h = common::spawn(&mut map, "Player", Vec3::new(1.1, 3.5, 0.0), 0.0);
    map.update(1.0 / 60.0, &mut []);
    let a = map.actor(h).expect("alive");
    assert!((a.position.x - (1.0 + a.radius())).abs() < 1e-3);
}

#[test]
fn projectile_dies_on_floor_contact() {
    let mut map = common::test_map();
    let mut info = actor_core::SpawnInfo::at("Bolt", Vec3::new(2.0, 2.0, 0.5), 0.0);
    info.velocity = Vec3::NEG_Z * 5.0;
    let h = map.spawn_actor(&info);
    assert!(h.is_valid());

    common::run_ticks(&mut map, 10, 1.0 / 60.0);
    assert!(
        map.actor(h)
            .map(|a| !a.is_alive() && a.position.z >= 0.0)
            .unwrap_or(true),
        "bolt should be clamped to the floor and dead"
    );
}

#[test]
fn projectile_dies_on_ceiling_contact() {
    let mut map = common::test_map();
    let mut info = actor_core::SpawnInfo::at("Bolt", Vec3::new(2.0, 2.0, 0.5), 0.0);
    info.velocity = Vec3::Z * 5.0;
    let h = map.spawn_actor(&info);
    assert!(h.is_valid());

    common::run_ticks(&mut map, 10, 1.0 / 60.0);
    assert!(
        map.actor(h)
            .map(|a| !a.is_alive() && a.position.z <= 1.0 - a.height() + 1e-3)
            .unwrap_or(true),
        "bolt should be clamped under the ceiling and dead"
    );
}

#[test]
fn projectile_dies_on_wall() {
    let mut map = common::test_map();
    // Flying east at wall height from just inside the arena.
    let mut info = actor_core::SpawnInfo::at("Bolt", Vec3::new(6.0, 1.5, 0.5), 0.0);
    info.velocity = Vec3::X * 5.0;
    let h = map.spawn_actor(&info);
    assert!(h.is_valid());

    common::run_ticks(&mut map, 30, 1.0 / 60.0);
    assert!(
        map.actor(h).map(|a| !a.is_alive()).unwrap_or(true),
        "bolt should be dead or reaped after hitting the east wall"
    );
}
