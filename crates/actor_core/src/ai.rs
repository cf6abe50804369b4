//! Melee/ranged chase brain.
//!
//! The brain is stored on its actor but lifted out for the duration of its
//! update so it can freely mutate the map (move its body, fire weapons,
//! query other actors) without aliasing it.

use glam::Vec3;

use crate::actor::Driver;
use crate::controller::Controller;
use crate::handle::ActorHandle;
use crate::map::Map;

#[derive(Debug, Default)]
pub struct AiBrain {
    own: ActorHandle,
    pub target: ActorHandle,
}

impl AiBrain {
    pub fn new() -> Self {
        Self {
            own: ActorHandle::INVALID,
            target: ActorHandle::INVALID,
        }
    }

    /// Getting hurt overrides the current target with the attacker.
    pub fn damaged_by(&mut self, attacker: ActorHandle) {
        if attacker.is_valid() {
            self.target = attacker;
        }
    }

    pub fn update(&mut self, map: &mut Map, dt: f32) {
        let own = self.own;
        let Some(me) = map.actor(own) else {
            return;
        };
        if me.dead {
            return;
        }
        let my_pos = me.position;
        let my_radius = me.radius();
        let run_speed = me.def.run_speed;
        let keeps_distance = me.def.keeps_distance;
        let weapon_def = me.equipped_weapon().map(|w| w.def.clone());

        // Drop targets that died or were reaped. Re-scan every tick so a
        // closer enemy stepping into view takes over; when nothing is
        // visible the current target (e.g. an unseen attacker) sticks.
        if self.target.is_valid() && !map.actor(self.target).map(|t| t.is_alive()).unwrap_or(false)
        {
            self.target = ActorHandle::INVALID;
        }
        let seen = map.closest_visible_enemy(own);
        if seen.is_valid() {
            self.target = seen;
        }
        let Some(target) = map.actor(self.target) else {
            return;
        };
        let target_pos = target.position;
        let target_radius = target.radius();
        let target_center = target_pos + Vec3::Z * target.height() * 0.5;

        let to_target = (target_pos - my_pos).truncate();
        let dist = to_target.length();
        let goal_yaw = to_target.y.atan2(to_target.x).to_degrees();

        let touching = dist < my_radius + target_radius + 1e-3;
        if let Some(me) = map.actor_mut(own) {
            me.turn_toward(goal_yaw, dt);
            if !keeps_distance && !touching {
                me.move_in_direction(to_target.extend(0.0), run_speed);
            }
        }

        let Some(wd) = weapon_def else {
            return;
        };
        // Each fire mode triggers purely on range; the weapon's own arc and
        // raycasts decide whether anything actually lands.
        let melee_in_reach = wd.melee_count > 0 && dist < wd.melee_range + target_radius;
        let ranged_in_reach =
            (wd.ray_count > 0 || wd.projectile_count > 0) && dist <= wd.max_range;
        if melee_in_reach || ranged_in_reach {
            if ranged_in_reach {
                // Pitch onto the target so flyers can shoot down at grounded
                // enemies and vice versa.
                if let Some(me) = map.actor_mut(own) {
                    let eye = me.eye_position();
                    me.pitch = aim_pitch_toward(eye, target_center);
                }
            }
            map.fire_weapon(own);
        }
    }
}

impl Controller for AiBrain {
    fn possessed(&self) -> ActorHandle {
        self.own
    }

    fn possess(&mut self, map: &mut Map, handle: ActorHandle) {
        if let Some(old) = map.actor_mut(self.own) {
            old.driver = Driver::None;
        }
        self.own = handle;
        if let Some(new) = map.actor_mut(handle) {
            new.driver = Driver::Ai;
        } else {
            self.own = ActorHandle::INVALID;
        }
    }
}

/// Pitch (degrees, positive looks down) that points `from` at `to`.
fn aim_pitch_toward(from: Vec3, to: Vec3) -> f32 {
    let flat = (to - from).truncate().length();
    let dz = to.z - from.z;
    (-dz).atan2(flat).to_degrees()
}
