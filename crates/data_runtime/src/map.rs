//! Map definition schema: an ASCII tile picture plus initial spawns and
//! lighting. Rows are listed top-down, the way the map reads on screen;
//! row 0 in the file is the highest-Y row of the grid.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct SpawnDef {
    pub actor: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub yaw_deg: f32,
    #[serde(default)]
    pub velocity: [f32; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapDef {
    pub name: String,
    /// Actor definition used when respawning a possessed player.
    #[serde(default = "default_player_actor")]
    pub player_actor: String,
    /// Single-character keys mapping row glyphs to tile definition names.
    pub legend: HashMap<String, String>,
    pub rows: Vec<String>,
    #[serde(default)]
    pub spawns: Vec<SpawnDef>,
    #[serde(default = "default_sun_direction")]
    pub sun_direction: [f32; 3],
    #[serde(default = "default_sun_intensity")]
    pub sun_intensity: f32,
    #[serde(default = "default_ambient_intensity")]
    pub ambient_intensity: f32,
}

fn default_player_actor() -> String {
    "Marine".to_string()
}

fn default_sun_direction() -> [f32; 3] {
    [2.0, 1.0, -1.0]
}

fn default_sun_intensity() -> f32 {
    0.35
}

fn default_ambient_intensity() -> f32 {
    0.25
}
