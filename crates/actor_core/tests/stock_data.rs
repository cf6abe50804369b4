//! The shipped data set loads and the stock arena comes up.

use std::sync::Arc;

use actor_core::{Map, NullAudio};

#[test]
fn arena_builds_from_stock_data() {
    let defs = data_runtime::load_default().expect("load data/sim");
    let map = Map::new(Arc::new(defs), "Arena", 1, Box::new(NullAudio)).expect("build arena");

    assert!(map.actor_count() > 0, "initial spawns placed");
    assert!(
        map.live_actors().any(|a| a.def.is_spawn_point),
        "arena has player spawn points"
    );
    assert!(!map.all_enemies_dead(), "demons present at start");
}

#[test]
fn stock_arena_ticks_without_players() {
    let defs = data_runtime::load_default().expect("load data/sim");
    let mut map = Map::new(Arc::new(defs), "Arena", 1, Box::new(NullAudio)).expect("build arena");
    for _ in 0..120 {
        map.update(1.0 / 60.0, &mut []);
    }
    // Demons have no marine to fight; everyone is still standing.
    assert!(!map.all_enemies_dead());
}
