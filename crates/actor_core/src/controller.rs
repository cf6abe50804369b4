//! Possession. A controller holds a handle to the actor it drives; the
//! actor records which kind of driver owns it so the tick pipeline knows
//! who to consult. Links are handles, never pointers, so a reaped actor
//! simply dangles into `None`.

use glam::Vec3;

use crate::actor::Driver;
use crate::handle::ActorHandle;
use crate::map::Map;

pub trait Controller {
    fn possessed(&self) -> ActorHandle;

    /// Release the current actor (if any still exists) and take `handle`.
    fn possess(&mut self, map: &mut Map, handle: ActorHandle);

    fn unpossess(&mut self, map: &mut Map) {
        self.possess(map, ActorHandle::INVALID);
    }
}

/// Decoded per-tick input for one player.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerIntent {
    /// World-space move direction; need not be normalized.
    pub move_dir: Vec3,
    /// Degrees to add to yaw this tick.
    pub yaw_delta: f32,
    /// Degrees to add to pitch this tick (positive looks down).
    pub pitch_delta: f32,
    pub sprint: bool,
    pub fire: bool,
    pub select_weapon: Option<usize>,
}

#[derive(Debug)]
pub struct PlayerController {
    handle: ActorHandle,
    pub lives: u32,
}

impl PlayerController {
    pub fn new(lives: u32) -> Self {
        Self {
            handle: ActorHandle::INVALID,
            lives,
        }
    }

    /// Steer, aim, and fire the possessed actor from decoded input.
    pub fn apply(&mut self, map: &mut Map, intent: &PlayerIntent) {
        let Some(me) = map.actor_mut(self.handle) else {
            return;
        };
        if me.dead {
            return;
        }
        me.yaw += intent.yaw_delta;
        me.pitch = (me.pitch + intent.pitch_delta).clamp(-85.0, 85.0);
        let speed = if intent.sprint {
            me.def.run_speed
        } else {
            me.def.walk_speed
        };
        if intent.move_dir != Vec3::ZERO {
            me.move_in_direction(intent.move_dir, speed);
        }
        if let Some(slot) = intent.select_weapon {
            me.select_weapon(slot);
        }
        if intent.fire {
            map.fire_weapon(self.handle);
        }
    }

    /// Debug helper: hop to the next possessable actor in slot order.
    pub fn possess_next(&mut self, map: &mut Map) {
        let next = map.next_possessable(self.handle);
        if next.is_valid() {
            self.possess(map, next);
        }
    }
}

impl Controller for PlayerController {
    fn possessed(&self) -> ActorHandle {
        self.handle
    }

    fn possess(&mut self, map: &mut Map, handle: ActorHandle) {
        if let Some(old) = map.actor_mut(self.handle) {
            old.driver = Driver::None;
        }
        self.handle = handle;
        if let Some(new) = map.actor_mut(handle) {
            new.driver = Driver::Player;
        } else {
            self.handle = ActorHandle::INVALID;
        }
    }
}
