//! Actor definition schema.
//!
//! One record per spawnable archetype (marine, demon, projectile, spawner,
//! spawn-point marker). Behavior is driven entirely by explicit fields
//! (spawner pulse, cruise height, keep-distance AI, projectile death), never
//! by matching on archetype names.

use serde::Deserialize;

use crate::FloatRange;

/// Periodic enemy production for spawner archetypes.
#[derive(Debug, Clone, Deserialize)]
pub struct SpawnerDef {
    /// Actor definition spawned each pulse.
    pub enemy_type: String,
    /// Seconds between pulses.
    pub interval: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActorDef {
    pub name: String,
    #[serde(default = "default_faction")]
    pub faction: String,
    #[serde(default)]
    pub visible: bool,
    #[serde(default = "default_health")]
    pub health: i32,
    /// Seconds a dead actor lingers before the registry reaps it.
    #[serde(default)]
    pub corpse_lifetime: f32,
    #[serde(default)]
    pub can_be_possessed: bool,

    // Collision cylinder + hit zones (heights local to the actor base).
    #[serde(default)]
    pub physics_radius: f32,
    #[serde(default)]
    pub physics_height: f32,
    #[serde(default)]
    pub leg_band: FloatRange,
    #[serde(default)]
    pub body_band: FloatRange,
    #[serde(default)]
    pub head_band: FloatRange,
    #[serde(default)]
    pub collides_with_world: bool,
    #[serde(default)]
    pub collides_with_actors: bool,
    #[serde(default)]
    pub die_on_collide: bool,
    #[serde(default)]
    pub damage_on_collide: FloatRange,
    #[serde(default)]
    pub impulse_on_collide: f32,

    // Physics.
    #[serde(default)]
    pub simulated: bool,
    #[serde(default)]
    pub flying: bool,
    /// Fixed cruise height for flyers that hold altitude.
    #[serde(default)]
    pub fly_height: Option<f32>,
    #[serde(default)]
    pub walk_speed: f32,
    #[serde(default)]
    pub run_speed: f32,
    #[serde(default)]
    pub drag: f32,
    /// Degrees per second.
    #[serde(default)]
    pub turn_speed: f32,
    #[serde(default)]
    pub eye_height: f32,

    // AI perception.
    #[serde(default)]
    pub ai_enabled: bool,
    #[serde(default)]
    pub sight_radius: f32,
    /// Total FOV aperture in degrees.
    #[serde(default)]
    pub sight_angle_deg: f32,
    /// Holds position once a target is acquired (ranged-only archetypes).
    #[serde(default)]
    pub keeps_distance: bool,

    #[serde(default)]
    pub is_projectile: bool,
    #[serde(default)]
    pub is_spawn_point: bool,
    #[serde(default)]
    pub die_on_spawn: bool,
    #[serde(default)]
    pub weapons: Vec<String>,
    /// Archetype override for melee damage; falls back to the weapon's range.
    #[serde(default)]
    pub melee_damage: Option<FloatRange>,
    #[serde(default)]
    pub spawner: Option<SpawnerDef>,

    #[serde(default)]
    pub hurt_sound: Option<String>,
    #[serde(default)]
    pub death_sound: Option<String>,
}

fn default_faction() -> String {
    "NEUTRAL".to_string()
}

fn default_health() -> i32 {
    1
}
