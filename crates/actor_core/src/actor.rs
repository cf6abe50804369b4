//! Runtime actor state. Definitions stay shared and immutable; everything
//! mutable per instance lives here.

use std::sync::Arc;

use data_runtime::ActorDef;
use glam::Vec3;

use crate::ai::AiBrain;
use crate::faction::Faction;
use crate::geom;
use crate::handle::ActorHandle;
use crate::weapon::Weapon;

/// Who steers the actor this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Driver {
    #[default]
    None,
    Ai,
    Player,
}

/// Vertical band a ray landed in, relative to the actor's base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    Head,
    Body,
    Legs,
}

impl HitZone {
    #[inline]
    pub fn damage_multiplier(self) -> f32 {
        match self {
            HitZone::Head => 2.0,
            HitZone::Body => 1.0,
            HitZone::Legs => 0.5,
        }
    }
}

#[derive(Debug)]
pub struct Actor {
    pub handle: ActorHandle,
    pub def: Arc<ActorDef>,
    pub faction: Faction,

    pub position: Vec3,
    /// Degrees, about +Z. 0 faces +X.
    pub yaw: f32,
    /// Degrees; positive pitches the view down.
    pub pitch: f32,
    pub velocity: Vec3,
    pub acceleration: Vec3,

    pub health: i32,
    /// Seconds since death (or since spawn for one-shot effects).
    pub lifetime: f32,
    pub dead: bool,
    /// Reaped by the registry at the end of the tick.
    pub destroyed: bool,

    slow_factor: f32,
    slow_timer: f32,

    pub weapons: Vec<Weapon>,
    pub equipped: usize,
    pub ai: Option<AiBrain>,
    pub driver: Driver,
    /// For projectiles: the actor whose shot spawned this one.
    pub firing_owner: ActorHandle,
    /// For spawner archetypes: seconds until the next pulse.
    pub spawn_timer: f32,
}

impl Actor {
    pub fn new(handle: ActorHandle, def: Arc<ActorDef>, position: Vec3, yaw: f32) -> Self {
        let faction = Faction::parse(&def.faction);
        let spawn_timer = def.spawner.as_ref().map(|s| s.interval).unwrap_or(0.0);
        Self {
            handle,
            faction,
            position,
            yaw,
            pitch: 0.0,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            health: def.health,
            lifetime: 0.0,
            dead: false,
            destroyed: false,
            slow_factor: 1.0,
            slow_timer: 0.0,
            weapons: Vec::new(),
            equipped: 0,
            ai: None,
            driver: Driver::None,
            firing_owner: ActorHandle::INVALID,
            spawn_timer,
            def,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.def.physics_radius
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.def.physics_height
    }

    /// Per-tick state advance: corpse aging, physics integration, status
    /// timers, weapon cooldowns. Decision-making happens elsewhere.
    pub fn update(&mut self, dt: f32) {
        if self.dead {
            self.lifetime += dt;
            if self.lifetime > self.def.corpse_lifetime {
                self.destroyed = true;
            }
            return;
        }

        if self.slow_timer > 0.0 {
            self.slow_timer -= dt;
            if self.slow_timer <= 0.0 {
                self.slow_factor = 1.0;
            }
        }

        if self.def.simulated {
            // Altitude policy before integration so drag sees no phantom
            // vertical velocity.
            if !self.def.flying {
                self.position.z = 0.0;
                self.velocity.z = 0.0;
            } else if let Some(h) = self.def.fly_height {
                self.position.z = h;
                self.velocity.z = 0.0;
            }
            self.acceleration += -self.def.drag * self.velocity;
            self.velocity += self.acceleration * dt;
            // A leg-hit slow bleeds speed off directly each tick.
            if self.slow_timer > 0.0 {
                self.velocity *= self.slow_factor;
            }
            self.position += self.velocity * dt;
        }
        self.acceleration = Vec3::ZERO;

        for w in &mut self.weapons {
            w.tick(dt);
        }
    }

    #[inline]
    pub fn add_force(&mut self, f: Vec3) {
        self.acceleration += f;
    }

    #[inline]
    pub fn add_impulse(&mut self, i: Vec3) {
        self.velocity += i;
    }

    /// Steer by force so top speed settles at `speed` against drag.
    pub fn move_in_direction(&mut self, dir: Vec3, speed: f32) {
        let dir = dir.normalize_or_zero();
        self.add_force(dir * speed * self.def.drag);
    }

    /// Rotate toward `goal_yaw` (degrees) at the definition's turn rate.
    pub fn turn_toward(&mut self, goal_yaw: f32, dt: f32) {
        self.yaw = geom::turn_toward_degrees(self.yaw, goal_yaw, self.def.turn_speed * dt);
    }

    pub fn slow(&mut self, factor: f32, seconds: f32) {
        self.slow_factor = factor;
        self.slow_timer = self.slow_timer.max(seconds);
    }

    #[inline]
    pub fn is_slowed(&self) -> bool {
        self.slow_timer > 0.0
    }

    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Z * self.def.eye_height
    }

    /// Unit view direction from yaw and pitch.
    pub fn forward_normal(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, -sp)
    }

    /// Classify a hit by its height above the actor's base.
    pub fn hit_zone(&self, local_z: f32) -> Option<HitZone> {
        if self.def.head_band.contains(local_z) {
            Some(HitZone::Head)
        } else if self.def.body_band.contains(local_z) {
            Some(HitZone::Body)
        } else if self.def.leg_band.contains(local_z) {
            Some(HitZone::Legs)
        } else {
            None
        }
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.weapons.get(self.equipped)
    }

    pub fn equipped_weapon_mut(&mut self) -> Option<&mut Weapon> {
        self.weapons.get_mut(self.equipped)
    }

    pub fn select_weapon(&mut self, index: usize) {
        if index < self.weapons.len() {
            self.equipped = index;
        }
    }
}
