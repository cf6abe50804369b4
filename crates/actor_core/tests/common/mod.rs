//! Shared fixtures: a small walled arena and a cast of minimal actor and
//! weapon definitions with deterministic numbers.
#![allow(dead_code)]

use std::sync::Arc;

use actor_core::{ActorHandle, Map, NullAudio, SpawnInfo};
use data_runtime::{ActorDef, Defs, MapDef, TileDef, WeaponDef};
use glam::Vec3;

fn actor(src: &str) -> ActorDef {
    toml::from_str(src).expect("actor def")
}

fn weapon(src: &str) -> WeaponDef {
    toml::from_str(src).expect("weapon def")
}

pub fn test_defs() -> Defs {
    let mut defs = Defs::new();

    defs.add_tile(toml::from_str::<TileDef>(r#"name = "Open""#).expect("tile def"));
    defs.add_tile(
        toml::from_str::<TileDef>(
            r#"
            name = "Wall"
            is_solid = true
            "#,
        )
        .expect("tile def"),
    );

    // 8x8 arena with a two-tile wall block in the middle (solid at x 3..5,
    // y 4..5) for line-of-sight scenarios.
    defs.add_map(
        toml::from_str::<MapDef>(
            r#########"
            name = "Test"
            player_actor = "Player"
            rows = [
              "########",
              "#......#",
              "#......#",
              "#..##..#",
              "#......#",
              "#......#",
              "#......#",
              "########",
            ]
            [legend]
            "#" = "Wall"
            "." = "Open"
            "#########,
        )
        .expect("map def"),
    );

    defs.add_weapon(weapon(
        r#"
        name = "Gun"
        refire_time = 0.5
        ray_count = 1
        ray_range = 10.0
        ray_damage = [10.0, 10.0]
        max_range = 10.0
        hit_actor = "Splat"
        miss_actor = "Chip"
        "#,
    ));
    defs.add_weapon(weapon(
        r#"
        name = "Bite"
        refire_time = 1.0
        melee_count = 1
        melee_arc_deg = 90.0
        melee_range = 1.0
        melee_damage = [5.0, 5.0]
        "#,
    ));
    defs.add_weapon(weapon(
        r#"
        name = "Launcher"
        refire_time = 0.5
        projectile_count = 1
        projectile_actor = "Bolt"
        projectile_speed = 5.0
        max_range = 10.0
        "#,
    ));

    defs.add_actor(actor(
        r#"
        name = "Player"
        faction = "MARINE"
        health = 100
        corpse_lifetime = 0.5
        can_be_possessed = true
        physics_radius = 0.3
        physics_height = 0.75
        leg_band = [0.0, 0.35]
        body_band = [0.35, 0.65]
        head_band = [0.65, 0.75]
        collides_with_world = true
        collides_with_actors = true
        simulated = true
        walk_speed = 1.0
        run_speed = 2.0
        drag = 9.0
        turn_speed = 180.0
        eye_height = 0.5
        weapons = ["Gun", "Launcher"]
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "Grunt"
        faction = "DEMON"
        health = 30
        corpse_lifetime = 0.5
        physics_radius = 0.3
        physics_height = 0.75
        body_band = [0.0, 0.75]
        collides_with_world = true
        collides_with_actors = true
        simulated = true
        walk_speed = 0.4
        run_speed = 0.8
        drag = 9.0
        turn_speed = 360.0
        eye_height = 0.5
        ai_enabled = true
        sight_radius = 12.0
        sight_angle_deg = 180.0
        weapons = ["Bite"]
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "MarineDummy"
        faction = "MARINE"
        health = 100
        corpse_lifetime = 0.5
        physics_radius = 0.3
        physics_height = 1.0
        body_band = [0.0, 1.0]
        collides_with_actors = true
        simulated = true
        drag = 9.0
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "DemonDummy"
        faction = "DEMON"
        health = 100
        corpse_lifetime = 0.5
        physics_radius = 0.3
        physics_height = 1.0
        body_band = [0.0, 1.0]
        collides_with_actors = true
        simulated = true
        drag = 9.0
        "#,
    ));
    // One dummy per hit zone; each band covers the full height.
    defs.add_actor(actor(
        r#"
        name = "HeadDummy"
        faction = "DEMON"
        health = 100
        physics_radius = 0.3
        physics_height = 1.0
        head_band = [0.0, 1.0]
        simulated = true
        drag = 9.0
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "BodyDummy"
        faction = "DEMON"
        health = 100
        physics_radius = 0.3
        physics_height = 1.0
        body_band = [0.0, 1.0]
        simulated = true
        drag = 9.0
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "LegDummy"
        faction = "DEMON"
        health = 100
        physics_radius = 0.3
        physics_height = 1.0
        leg_band = [0.0, 1.0]
        simulated = true
        drag = 9.0
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "Pillar"
        faction = "NEUTRAL"
        health = 1000
        physics_radius = 0.4
        physics_height = 1.0
        collides_with_actors = true
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "Rammer"
        faction = "DEMON"
        health = 20
        physics_radius = 0.3
        physics_height = 0.5
        body_band = [0.0, 0.5]
        collides_with_actors = true
        damage_on_collide = [5.0, 5.0]
        simulated = true
        drag = 9.0
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "Bolt"
        faction = "NEUTRAL"
        health = 1
        corpse_lifetime = 0.1
        physics_radius = 0.05
        physics_height = 0.1
        body_band = [0.0, 0.1]
        collides_with_world = true
        collides_with_actors = true
        die_on_collide = true
        damage_on_collide = [5.0, 5.0]
        simulated = true
        flying = true
        is_projectile = true
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "Splat"
        faction = "NEUTRAL"
        corpse_lifetime = 0.2
        die_on_spawn = true
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "Chip"
        faction = "NEUTRAL"
        corpse_lifetime = 0.2
        die_on_spawn = true
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "Nest"
        faction = "DEMON"
        health = 50
        spawner = { enemy_type = "DemonDummy", interval = 1.0 }
        "#,
    ));
    defs.add_actor(actor(
        r#"
        name = "SpawnPoint"
        faction = "NEUTRAL"
        health = 1000
        is_spawn_point = true
        "#,
    ));

    defs
}

pub fn test_map() -> Map {
    Map::new(Arc::new(test_defs()), "Test", 7, Box::new(NullAudio)).expect("build test map")
}

pub fn spawn(map: &mut Map, def: &str, pos: Vec3, yaw: f32) -> ActorHandle {
    let h = map.spawn_actor(&SpawnInfo::at(def, pos, yaw));
    assert!(h.is_valid(), "failed to spawn {def}");
    h
}

/// Step the map with no players attached.
pub fn run_ticks(map: &mut Map, ticks: usize, dt: f32) {
    for _ in 0..ticks {
        map.update(dt, &mut []);
    }
}
