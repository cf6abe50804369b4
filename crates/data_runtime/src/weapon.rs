//! Weapon definition schema: refire pacing plus up to three fire modes
//! (hitscan rays, spawned projectiles, melee swings), each gated by its
//! count field.

use serde::Deserialize;

use crate::FloatRange;

#[derive(Debug, Clone, Deserialize)]
pub struct WeaponDef {
    pub name: String,
    /// Minimum seconds between shots.
    #[serde(default)]
    pub refire_time: f32,

    // Hitscan.
    #[serde(default)]
    pub ray_count: u32,
    #[serde(default)]
    pub ray_range: f32,
    pub ray_damage: Option<FloatRange>,
    #[serde(default)]
    pub ray_impulse: f32,
    /// Actor spawned where a ray strikes an actor.
    #[serde(default)]
    pub hit_actor: Option<String>,
    /// Actor spawned where a ray strikes world geometry.
    #[serde(default)]
    pub miss_actor: Option<String>,

    // Projectile.
    #[serde(default)]
    pub projectile_count: u32,
    #[serde(default)]
    pub projectile_actor: Option<String>,
    /// Aim jitter half-angle in degrees.
    #[serde(default)]
    pub projectile_cone_deg: f32,
    #[serde(default)]
    pub projectile_speed: f32,
    /// AI engagement range for ranged modes.
    #[serde(default)]
    pub max_range: f32,

    // Melee.
    #[serde(default)]
    pub melee_count: u32,
    /// Total arc aperture in degrees.
    #[serde(default)]
    pub melee_arc_deg: f32,
    #[serde(default)]
    pub melee_range: f32,
    #[serde(default)]
    pub melee_damage: FloatRange,
    #[serde(default)]
    pub melee_impulse: f32,

    #[serde(default)]
    pub fire_sound: Option<String>,
}
