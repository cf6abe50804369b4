//! TOML loaders that resolve paths under the workspace `data/` directory.

use crate::actor::ActorDef;
use crate::map::MapDef;
use crate::tile::TileDef;
use crate::weapon::WeaponDef;
use crate::Defs;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn data_root() -> PathBuf {
    // Prefer top-level workspace `data/` so tests and tools can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Read a raw TOML file under `data/` and return its string.
pub fn read_toml(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    let s = fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))?;
    Ok(s)
}

#[derive(Deserialize)]
struct ActorsFile {
    #[serde(default)]
    actors: Vec<ActorDef>,
}

#[derive(Deserialize)]
struct WeaponsFile {
    #[serde(default)]
    weapons: Vec<WeaponDef>,
}

#[derive(Deserialize)]
struct TilesFile {
    #[serde(default)]
    tiles: Vec<TileDef>,
}

#[derive(Deserialize)]
struct MapsFile {
    #[serde(default)]
    maps: Vec<MapDef>,
}

/// Load every definition table under `data/<dir>/` into one registry.
pub fn load_defs(dir: impl AsRef<Path>) -> Result<Defs> {
    let dir = dir.as_ref();
    let mut defs = Defs::default();

    let txt = read_toml(dir.join("actors.toml"))?;
    let file: ActorsFile = toml::from_str(&txt).context("parse actors.toml")?;
    for a in file.actors {
        defs.add_actor(a);
    }

    let txt = read_toml(dir.join("weapons.toml"))?;
    let file: WeaponsFile = toml::from_str(&txt).context("parse weapons.toml")?;
    for w in file.weapons {
        defs.add_weapon(w);
    }

    let txt = read_toml(dir.join("tiles.toml"))?;
    let file: TilesFile = toml::from_str(&txt).context("parse tiles.toml")?;
    for t in file.tiles {
        defs.add_tile(t);
    }

    let txt = read_toml(dir.join("maps.toml"))?;
    let file: MapsFile = toml::from_str(&txt).context("parse maps.toml")?;
    for m in file.maps {
        defs.add_map(m);
    }

    Ok(defs)
}

/// Load the stock simulation data set shipped under `data/sim/`.
pub fn load_default() -> Result<Defs> {
    load_defs("sim")
}
