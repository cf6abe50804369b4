//! data_runtime: definition schemas and loaders for the simulation core.
//!
//! Actor, weapon, tile, and map definitions are immutable configuration,
//! loaded once and shared by `Arc`. This crate stays free of simulation
//! types; the sim converts into its own enums (faction, drivers) at the
//! spawn boundary.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

pub mod actor;
pub mod loader;
pub mod map;
pub mod tile;
pub mod weapon;

pub use actor::{ActorDef, SpawnerDef};
pub use loader::{load_default, load_defs};
pub use map::{MapDef, SpawnDef};
pub use tile::TileDef;
pub use weapon::WeaponDef;

/// Inclusive `[min, max]` band, written as a `(min, max)` tuple in data files.
/// Used for damage rolls and hit-zone height classification.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f32, f32)")]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const ZERO: FloatRange = FloatRange { min: 0.0, max: 0.0 };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

impl Default for FloatRange {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<(f32, f32)> for FloatRange {
    fn from(t: (f32, f32)) -> Self {
        Self { min: t.0, max: t.1 }
    }
}

/// Name-keyed registries for every definition family. Lookups return `None`
/// for unknown names; callers decide whether that is fatal (load time) or a
/// skipped action (run time).
#[derive(Debug, Default)]
pub struct Defs {
    actors: HashMap<String, Arc<ActorDef>>,
    weapons: HashMap<String, Arc<WeaponDef>>,
    tiles: HashMap<String, Arc<TileDef>>,
    maps: HashMap<String, Arc<MapDef>>,
}

impl Defs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actor(&self, name: &str) -> Option<Arc<ActorDef>> {
        self.actors.get(name).cloned()
    }

    pub fn weapon(&self, name: &str) -> Option<Arc<WeaponDef>> {
        self.weapons.get(name).cloned()
    }

    pub fn tile(&self, name: &str) -> Option<Arc<TileDef>> {
        self.tiles.get(name).cloned()
    }

    pub fn map(&self, name: &str) -> Option<Arc<MapDef>> {
        self.maps.get(name).cloned()
    }

    pub fn add_actor(&mut self, def: ActorDef) {
        self.actors.insert(def.name.clone(), Arc::new(def));
    }

    pub fn add_weapon(&mut self, def: WeaponDef) {
        self.weapons.insert(def.name.clone(), Arc::new(def));
    }

    pub fn add_tile(&mut self, def: TileDef) {
        self.tiles.insert(def.name.clone(), Arc::new(def));
    }

    pub fn add_map(&mut self, def: MapDef) {
        self.maps.insert(def.name.clone(), Arc::new(def));
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }
}
