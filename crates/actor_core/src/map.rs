//! The map owns the tile grid and the actor registry and drives the fixed
//! tick. One tick runs, in order: actor updates (AI, spawner pulses,
//! physics), actor-vs-actor collision, actor-vs-world collision, reaping of
//! destroyed actors, and the player respawn pass. Systems communicate
//! through handles and an effect buffer, never through stored references.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use data_runtime::Defs;
use glam::{IVec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::actor::{Actor, Driver, HitZone};
use crate::audio::AudioSink;
use crate::controller::{Controller, PlayerController};
use crate::faction::{are_hostile, Faction};
use crate::geom;
use crate::grid::TileGrid;
use crate::handle::ActorHandle;
use crate::raycast::{self, RayHit};
use crate::weapon::Weapon;

/// Slow applied by a leg hit.
const LEG_HIT_SLOW_FACTOR: f32 = 0.5;
const LEG_HIT_SLOW_SECONDS: f32 = 3.0;

/// Projectiles spawn this far in front of the shooter's eye.
const MUZZLE_OFFSET: f32 = 0.3;

/// Everything needed to spawn one actor.
#[derive(Debug, Clone)]
pub struct SpawnInfo {
    pub def_name: String,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub velocity: Vec3,
    pub firing_owner: ActorHandle,
}

impl SpawnInfo {
    pub fn at(def_name: impl Into<String>, position: Vec3, yaw: f32) -> Self {
        Self {
            def_name: def_name.into(),
            position,
            yaw,
            pitch: 0.0,
            velocity: Vec3::ZERO,
            firing_owner: ActorHandle::INVALID,
        }
    }
}

/// Deferred outcome of a collision scan, applied once the pair loop ends.
enum Effect {
    Damage {
        target: ActorHandle,
        amount: f32,
        attacker: ActorHandle,
    },
    Impulse {
        target: ActorHandle,
        v: Vec3,
    },
    Kill {
        target: ActorHandle,
    },
}

pub struct Map {
    defs: Arc<Defs>,
    grid: TileGrid,
    actors: Vec<Option<Actor>>,
    next_uid: u32,
    rng: SmallRng,
    audio: Box<dyn AudioSink>,

    /// Definition respawning players come back as.
    pub player_actor: String,
    pub sun_direction: Vec3,
    pub sun_intensity: f32,
    pub ambient_intensity: f32,
}

impl Map {
    pub fn new(
        defs: Arc<Defs>,
        map_name: &str,
        seed: u64,
        audio: Box<dyn AudioSink>,
    ) -> Result<Self> {
        let map_def = defs
            .map(map_name)
            .with_context(|| format!("unknown map {map_name:?}"))?;
        let grid = TileGrid::from_map_def(&map_def, &defs)?;
        let mut map = Self {
            defs,
            grid,
            actors: Vec::new(),
            next_uid: 0,
            rng: SmallRng::seed_from_u64(seed),
            audio,
            player_actor: map_def.player_actor.clone(),
            sun_direction: Vec3::from(map_def.sun_direction),
            sun_intensity: map_def.sun_intensity,
            ambient_intensity: map_def.ambient_intensity,
        };
        for spawn in &map_def.spawns {
            let mut info = SpawnInfo::at(&spawn.actor, Vec3::from(spawn.position), spawn.yaw_deg);
            info.velocity = Vec3::from(spawn.velocity);
            map.spawn_actor(&info);
        }
        log::info!(
            "loaded map {:?}: {}x{} tiles, {} initial actors",
            map_def.name,
            map.grid.dims().x,
            map.grid.dims().y,
            map.live_actors().count()
        );
        Ok(map)
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[inline]
    pub fn defs(&self) -> &Defs {
        &self.defs
    }

    /// Dereference a handle. Stale handles (slot reused under a newer uid)
    /// and the invalid sentinel both come back `None`.
    pub fn actor(&self, handle: ActorHandle) -> Option<&Actor> {
        if !handle.is_valid() {
            return None;
        }
        self.actors
            .get(handle.index())?
            .as_ref()
            .filter(|a| a.handle == handle)
    }

    pub fn actor_mut(&mut self, handle: ActorHandle) -> Option<&mut Actor> {
        if !handle.is_valid() {
            return None;
        }
        self.actors
            .get_mut(handle.index())?
            .as_mut()
            .filter(|a| a.handle == handle)
    }

    pub fn live_actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().flatten()
    }

    /// Create an actor in the first free slot. Returns `INVALID` when the
    /// definition is unknown or the registry is full.
    pub fn spawn_actor(&mut self, info: &SpawnInfo) -> ActorHandle {
        let Some(def) = self.defs.actor(&info.def_name) else {
            log::warn!("spawn of unknown actor {:?} skipped", info.def_name);
            return ActorHandle::INVALID;
        };
        let index = match self.actors.iter().position(|slot| slot.is_none()) {
            Some(i) => i,
            None => {
                if self.actors.len() > ActorHandle::MAX_INDEX as usize {
                    log::warn!("actor registry full; spawn of {:?} skipped", info.def_name);
                    return ActorHandle::INVALID;
                }
                self.actors.push(None);
                self.actors.len() - 1
            }
        };
        let uid = self.next_uid;
        self.next_uid = if self.next_uid >= ActorHandle::MAX_UID {
            0
        } else {
            self.next_uid + 1
        };
        let handle = ActorHandle::new(uid, index as u32);

        let mut actor = Actor::new(handle, def.clone(), info.position, info.yaw);
        actor.pitch = info.pitch;
        actor.velocity = info.velocity;
        actor.firing_owner = info.firing_owner;
        if def.die_on_spawn {
            actor.dead = true;
        }
        for name in &def.weapons {
            match self.defs.weapon(name) {
                Some(wd) => actor.weapons.push(Weapon::new(wd)),
                None => log::warn!("actor {:?} lists unknown weapon {:?}", def.name, name),
            }
        }
        self.actors[index] = Some(actor);
        if def.ai_enabled {
            let mut brain = crate::ai::AiBrain::new();
            brain.possess(self, handle);
            if let Some(a) = self.actor_mut(handle) {
                a.ai = Some(brain);
            }
        }
        metrics::counter!("sim.actors_spawned_total").increment(1);
        handle
    }

    /// Flag an actor dead; its corpse lingers for `corpse_lifetime`.
    pub fn kill(&mut self, target: ActorHandle) {
        let Some(actor) = self.actor_mut(target) else {
            return;
        };
        if actor.dead {
            return;
        }
        actor.dead = true;
        actor.lifetime = 0.0;
        actor.velocity = Vec3::ZERO;
        let pos = actor.position;
        let sound = actor.def.death_sound.clone();
        log::debug!("{} {:?} died", actor.def.name, target);
        metrics::counter!("sim.actors_killed_total").increment(1);
        if let Some(s) = sound {
            self.audio.play_at(&s, pos);
        }
    }

    /// Apply damage, waking the victim's AI onto the attacker. Kills when
    /// health crosses zero.
    pub fn apply_damage(&mut self, target: ActorHandle, amount: f32, attacker: ActorHandle) {
        let Some(actor) = self.actor_mut(target) else {
            return;
        };
        if actor.dead {
            return;
        }
        actor.health -= amount.round() as i32;
        let died = actor.health <= 0;
        let pos = actor.position;
        let hurt = actor.def.hurt_sound.clone();
        if let Some(brain) = actor.ai.as_mut() {
            brain.damaged_by(attacker);
        }
        if died {
            self.kill(target);
        } else if let Some(s) = hurt {
            self.audio.play_at(&s, pos);
        }
    }

    /// Advance the world one fixed step.
    pub fn update(&mut self, dt: f32, players: &mut [PlayerController]) {
        let started = Instant::now();

        self.update_actors(dt);
        self.collide_actors();
        self.collide_actors_with_map();
        self.delete_destroyed();
        self.respawn_players(players);

        metrics::histogram!("sim.tick_ms").record(started.elapsed().as_secs_f64() * 1000.0);
    }

    fn update_actors(&mut self, dt: f32) {
        for index in 0..self.actors.len() {
            let Some(actor) = self.actors[index].as_mut() else {
                continue;
            };
            let handle = actor.handle;

            // Lift the brain out so it can mutate the map it lives in. A
            // player-possessed actor keeps its brain but the brain sits out.
            if actor.driver != Driver::Player {
                if let Some(mut brain) = actor.ai.take() {
                    brain.update(self, dt);
                    if let Some(a) = self.actor_mut(handle) {
                        a.ai = Some(brain);
                    }
                }
            }

            let Some(actor) = self.actors[index].as_mut() else {
                continue;
            };
            if actor.is_alive() {
                if let Some(spawner) = actor.def.spawner.clone() {
                    actor.spawn_timer -= dt;
                    if actor.spawn_timer <= 0.0 {
                        actor.spawn_timer += spawner.interval;
                        let pos = actor.position;
                        let yaw = actor.yaw;
                        self.spawn_actor(&SpawnInfo::at(&spawner.enemy_type, pos, yaw));
                    }
                }
            }

            if let Some(actor) = self.actors[index].as_mut() {
                actor.update(dt);
            }
        }
    }

    fn collide_actors(&mut self) {
        let mut effects: Vec<Effect> = Vec::new();
        let count = self.actors.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.actors.split_at_mut(j);
                let (Some(a), Some(b)) = (head[i].as_mut(), tail[0].as_mut()) else {
                    continue;
                };
                if a.dead || b.dead {
                    continue;
                }
                if !a.def.collides_with_actors || !b.def.collides_with_actors {
                    continue;
                }
                if a.def.is_projectile && b.def.is_projectile {
                    continue;
                }
                // A projectile never interacts with the actor that fired it.
                if a.firing_owner == b.handle || b.firing_owner == a.handle {
                    continue;
                }
                let z_overlap =
                    a.position.z < b.position.z + b.height() && b.position.z < a.position.z + a.height();
                if !z_overlap {
                    continue;
                }
                let mut pa = a.position.truncate();
                let mut pb = b.position.truncate();
                if !geom::discs_overlap(pa, a.radius(), pb, b.radius()) {
                    continue;
                }

                match (a.def.simulated, b.def.simulated) {
                    (true, true) => {
                        geom::push_discs_out_of_each_other(&mut pa, a.radius(), &mut pb, b.radius());
                        a.position = pa.extend(a.position.z);
                        b.position = pb.extend(b.position.z);
                    }
                    (true, false) => {
                        geom::push_disc_out_of_disc(&mut pa, a.radius(), pb, b.radius());
                        a.position = pa.extend(a.position.z);
                    }
                    (false, true) => {
                        geom::push_disc_out_of_disc(&mut pb, b.radius(), pa, a.radius());
                        b.position = pb.extend(b.position.z);
                    }
                    (false, false) => {}
                }

                for (x, other) in [(&*a, &*b), (&*b, &*a)] {
                    let interacts = if x.firing_owner.is_valid() {
                        true
                    } else {
                        are_hostile(x.faction, other.faction)
                    };
                    if !interacts {
                        continue;
                    }
                    let damage = x.def.damage_on_collide;
                    let deals_damage = damage.max > 0.0;
                    if !deals_damage && !x.def.die_on_collide {
                        continue;
                    }
                    let attacker = if x.firing_owner.is_valid() {
                        x.firing_owner
                    } else {
                        x.handle
                    };
                    if deals_damage {
                        let amount = if damage.max > damage.min {
                            self.rng.random_range(damage.min..=damage.max)
                        } else {
                            damage.min
                        };
                        effects.push(Effect::Damage {
                            target: other.handle,
                            amount,
                            attacker,
                        });
                    }
                    if x.def.impulse_on_collide > 0.0 {
                        let dir = (other.position - x.position)
                            .truncate()
                            .normalize_or_zero()
                            .extend(0.0);
                        effects.push(Effect::Impulse {
                            target: other.handle,
                            v: dir * x.def.impulse_on_collide,
                        });
                    }
                    if x.def.die_on_collide {
                        effects.push(Effect::Kill { target: x.handle });
                    }
                }
            }
        }
        for effect in effects {
            match effect {
                Effect::Damage {
                    target,
                    amount,
                    attacker,
                } => self.apply_damage(target, amount, attacker),
                Effect::Impulse { target, v } => {
                    if let Some(a) = self.actor_mut(target) {
                        a.add_impulse(v);
                    }
                }
                Effect::Kill { target } => self.kill(target),
            }
        }
    }

    fn collide_actors_with_map(&mut self) {
        let mut killed: Vec<ActorHandle> = Vec::new();
        for slot in &mut self.actors {
            let Some(actor) = slot.as_mut() else {
                continue;
            };
            if actor.dead || !actor.def.collides_with_world {
                continue;
            }

            let mut hit_world = false;

            // Floor and ceiling.
            if actor.position.z < 0.0 {
                actor.position.z = 0.0;
                actor.velocity.z = actor.velocity.z.max(0.0);
                hit_world = true;
            }
            let top = 1.0 - actor.height();
            if actor.position.z > top {
                actor.position.z = top;
                actor.velocity.z = actor.velocity.z.min(0.0);
                hit_world = true;
            }

            let radius = actor.radius();
            let mut center = actor.position.truncate();
            let coords = self.grid.coords_for(center);

            // Cardinal neighbors first so corner pushes resolve along the
            // dominant axis, then diagonals.
            const CARDINAL: [IVec2; 4] = [
                IVec2::new(1, 0),
                IVec2::new(-1, 0),
                IVec2::new(0, 1),
                IVec2::new(0, -1),
            ];
            const DIAGONAL: [IVec2; 4] = [
                IVec2::new(1, 1),
                IVec2::new(1, -1),
                IVec2::new(-1, 1),
                IVec2::new(-1, -1),
            ];
            for offset in CARDINAL {
                let c = coords + offset;
                if self.grid.is_solid(c) {
                    let (min, max) = self.grid.tile_bounds(c);
                    hit_world |= geom::push_disc_out_of_aabb(&mut center, radius, min, max);
                }
            }
            for offset in DIAGONAL {
                let c = coords + offset;
                if self.grid.is_solid(c) {
                    let (min, max) = self.grid.tile_bounds(c);
                    hit_world |= geom::push_disc_out_of_aabb(&mut center, radius, min, max);
                }
            }
            actor.position = center.extend(actor.position.z);

            if hit_world && actor.def.is_projectile && actor.def.die_on_collide {
                killed.push(actor.handle);
            }
        }
        for handle in killed {
            self.kill(handle);
        }
    }

    fn delete_destroyed(&mut self) {
        for slot in &mut self.actors {
            if slot.as_ref().map(|a| a.destroyed).unwrap_or(false) {
                metrics::counter!("sim.actors_reaped_total").increment(1);
                *slot = None;
            }
        }
    }

    fn respawn_players(&mut self, players: &mut [PlayerController]) {
        for pc in players {
            if self.actor(pc.possessed()).is_some() || pc.lives == 0 {
                continue;
            }
            let spawn_points: Vec<(Vec3, f32)> = self
                .live_actors()
                .filter(|a| a.def.is_spawn_point)
                .map(|a| (a.position, a.yaw))
                .collect();
            if spawn_points.is_empty() {
                log::warn!("no spawn points; cannot respawn player");
                return;
            }
            let (pos, yaw) = spawn_points[self.rng.random_range(0..spawn_points.len())];
            pc.lives -= 1;
            let player_actor = self.player_actor.clone();
            let handle = self.spawn_actor(&SpawnInfo::at(player_actor, pos, yaw));
            pc.possess(self, handle);
        }
    }

    /// Fire the owner's equipped weapon. Returns false when the handle is
    /// stale, the owner is dead, or the weapon is still cooling down.
    pub fn fire_weapon(&mut self, owner: ActorHandle) -> bool {
        let Some(me) = self.actor_mut(owner) else {
            return false;
        };
        if me.dead {
            return false;
        }
        let position = me.position;
        let eye = me.eye_position();
        let forward = me.forward_normal();
        let yaw = me.yaw;
        let pitch = me.pitch;
        let melee_override = me.def.melee_damage;
        let Some(weapon) = me.equipped_weapon_mut() else {
            return false;
        };
        if !weapon.ready() {
            return false;
        }
        weapon.reset_cooldown();
        let wd = weapon.def.clone();

        if let Some(s) = wd.fire_sound.as_deref() {
            self.audio.play_at(s, position);
        }

        for _ in 0..wd.ray_count {
            self.fire_ray(owner, eye, forward, &wd);
        }
        for _ in 0..wd.projectile_count {
            self.fire_projectile(owner, eye, yaw, pitch, &wd);
        }
        for _ in 0..wd.melee_count {
            self.fire_melee(owner, position, yaw, melee_override, &wd);
        }
        true
    }

    fn fire_ray(&mut self, owner: ActorHandle, eye: Vec3, dir: Vec3, wd: &data_runtime::WeaponDef) {
        let (hit, victim) = self.raycast_all_from(owner, eye, dir, wd.ray_range);
        let Some(hit) = hit else {
            return;
        };
        if victim.is_valid() {
            let Some(target) = self.actor(victim) else {
                return;
            };
            let local_z = hit.pos.z - target.position.z;
            let zone = target.hit_zone(local_z);
            let base = wd.ray_damage.map(|d| d.min).unwrap_or(0.0);
            let amount = base * zone.map(HitZone::damage_multiplier).unwrap_or(1.0);
            if zone == Some(HitZone::Legs) {
                if let Some(t) = self.actor_mut(victim) {
                    t.slow(LEG_HIT_SLOW_FACTOR, LEG_HIT_SLOW_SECONDS);
                }
            }
            if wd.ray_impulse > 0.0 {
                if let Some(t) = self.actor_mut(victim) {
                    t.add_impulse(dir * wd.ray_impulse);
                }
            }
            self.apply_damage(victim, amount, owner);
            if let Some(name) = wd.hit_actor.as_deref() {
                self.spawn_effect(name, hit.pos);
            }
        } else if let Some(name) = wd.miss_actor.as_deref() {
            // Nudge off the surface so the decal is not embedded in it.
            self.spawn_effect(name, hit.pos + hit.normal * 0.01);
        }
    }

    fn fire_projectile(
        &mut self,
        owner: ActorHandle,
        eye: Vec3,
        yaw: f32,
        pitch: f32,
        wd: &data_runtime::WeaponDef,
    ) {
        let Some(actor_name) = wd.projectile_actor.as_deref() else {
            log::warn!("weapon {:?} has projectiles but no projectile_actor", wd.name);
            return;
        };
        let cone = wd.projectile_cone_deg;
        let (yaw, pitch) = if cone > 0.0 {
            (
                yaw + self.rng.random_range(-cone..=cone),
                pitch + self.rng.random_range(-cone..=cone),
            )
        } else {
            (yaw, pitch)
        };
        let (sy, cy) = yaw.to_radians().sin_cos();
        let (sp, cp) = pitch.to_radians().sin_cos();
        let dir = Vec3::new(cp * cy, cp * sy, -sp);

        let mut info = SpawnInfo::at(actor_name, eye + dir * MUZZLE_OFFSET, yaw);
        info.pitch = pitch;
        info.velocity = dir * wd.projectile_speed;
        info.firing_owner = owner;
        self.spawn_actor(&info);
    }

    fn fire_melee(
        &mut self,
        owner: ActorHandle,
        position: Vec3,
        yaw: f32,
        melee_override: Option<data_runtime::FloatRange>,
        wd: &data_runtime::WeaponDef,
    ) {
        let Some(me) = self.actor(owner) else {
            return;
        };
        let my_faction = me.faction;
        let half_arc = wd.melee_arc_deg * 0.5;

        let mut best: ActorHandle = ActorHandle::INVALID;
        let mut best_d2 = f32::MAX;
        for other in self.live_actors() {
            if other.handle == owner || other.dead {
                continue;
            }
            if !are_hostile(my_faction, other.faction) {
                continue;
            }
            let to = (other.position - position).truncate();
            let reach = wd.melee_range + other.radius();
            let d2 = to.length_squared();
            if d2 > reach * reach {
                continue;
            }
            let bearing = to.y.atan2(to.x).to_degrees();
            if geom::angle_delta_degrees(yaw, bearing).abs() > half_arc {
                continue;
            }
            if d2 < best_d2 {
                best_d2 = d2;
                best = other.handle;
            }
        }
        if !best.is_valid() {
            return;
        }

        let damage = melee_override.unwrap_or(wd.melee_damage);
        let amount = if damage.max > damage.min {
            self.rng.random_range(damage.min..=damage.max)
        } else {
            damage.min
        };
        if wd.melee_impulse > 0.0 {
            if let Some(t) = self.actor_mut(best) {
                let away = (t.position - position).truncate().normalize_or_zero().extend(0.0);
                t.add_impulse(away * wd.melee_impulse);
            }
        }
        self.apply_damage(best, amount, owner);
    }

    fn spawn_effect(&mut self, def_name: &str, pos: Vec3) {
        if self.defs.actor(def_name).is_some() {
            self.spawn_actor(&SpawnInfo::at(def_name, pos, 0.0));
        }
    }

    /// Nearest hit against actors, walls, floor, and ceiling.
    pub fn raycast_all(&self, start: Vec3, dir: Vec3, max_dist: f32) -> Option<RayHit> {
        self.raycast_all_from(ActorHandle::INVALID, start, dir, max_dist).0
    }

    /// Like [`raycast_all`](Self::raycast_all) but skips `owner`, and
    /// reports which actor (if any) produced the winning hit.
    pub fn raycast_all_from(
        &self,
        owner: ActorHandle,
        start: Vec3,
        dir: Vec3,
        max_dist: f32,
    ) -> (Option<RayHit>, ActorHandle) {
        let mut best: Option<RayHit> = None;
        let mut best_actor = ActorHandle::INVALID;

        for actor in self.live_actors() {
            if actor.handle == owner || actor.dead || actor.radius() <= 0.0 {
                continue;
            }
            if let Some(hit) =
                raycast::ray_vs_cylinder(start, dir, max_dist, actor.position, actor.radius(), actor.height())
            {
                if best.map(|b| hit.dist < b.dist).unwrap_or(true) {
                    best = Some(hit);
                    best_actor = actor.handle;
                }
            }
        }
        if let Some(hit) = raycast::raycast_grid_xy(&self.grid, start, dir, max_dist) {
            if best.map(|b| hit.dist < b.dist).unwrap_or(true) {
                best = Some(hit);
                best_actor = ActorHandle::INVALID;
            }
        }
        if let Some(hit) = raycast::raycast_planes_z(&self.grid, start, dir, max_dist) {
            if best.map(|b| hit.dist < b.dist).unwrap_or(true) {
                best = Some(hit);
                best_actor = ActorHandle::INVALID;
            }
        }
        (best, best_actor)
    }

    /// Nearest living hostile inside the viewer's sight radius and FOV with
    /// clear line of sight to its center.
    pub fn closest_visible_enemy(&self, viewer: ActorHandle) -> ActorHandle {
        let Some(me) = self.actor(viewer) else {
            return ActorHandle::INVALID;
        };
        let eye = me.eye_position();
        let sight_r2 = me.def.sight_radius * me.def.sight_radius;
        let half_fov = me.def.sight_angle_deg * 0.5;

        let mut best = ActorHandle::INVALID;
        let mut best_d2 = f32::MAX;
        for other in self.live_actors() {
            if other.handle == viewer || other.dead {
                continue;
            }
            if !are_hostile(me.faction, other.faction) {
                continue;
            }
            let to = (other.position - me.position).truncate();
            let d2 = to.length_squared();
            if d2 > sight_r2 || d2 >= best_d2 {
                continue;
            }
            let bearing = to.y.atan2(to.x).to_degrees();
            if geom::angle_delta_degrees(me.yaw, bearing).abs() > half_fov {
                continue;
            }
            let center = other.position + Vec3::Z * other.height() * 0.5;
            let delta = center - eye;
            let dist = delta.length();
            if dist > 1e-4 {
                let dir = delta / dist;
                let (hit, hit_actor) = self.raycast_all_from(viewer, eye, dir, dist);
                if let Some(hit) = hit {
                    let occluded =
                        hit_actor != other.handle && hit.dist < dist - other.radius() - 0.1;
                    if occluded {
                        continue;
                    }
                }
            }
            best_d2 = d2;
            best = other.handle;
        }
        best
    }

    /// Next possessable actor after `current` in slot order, wrapping.
    pub fn next_possessable(&self, current: ActorHandle) -> ActorHandle {
        let count = self.actors.len();
        if count == 0 {
            return ActorHandle::INVALID;
        }
        let start = if current.is_valid() && current.index() < count {
            current.index() + 1
        } else {
            0
        };
        for i in 0..count {
            let index = (start + i) % count;
            if let Some(actor) = self.actors[index].as_ref() {
                if actor.is_alive() && actor.def.can_be_possessed && actor.handle != current {
                    return actor.handle;
                }
            }
        }
        ActorHandle::INVALID
    }

    /// Victory check: no living demon-faction actor remains.
    pub fn all_enemies_dead(&self) -> bool {
        !self
            .live_actors()
            .any(|a| a.is_alive() && a.faction == Faction::Demon)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.iter().flatten().count()
    }
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("dims", &self.grid.dims())
            .field("actors", &self.actor_count())
            .finish()
    }
}
