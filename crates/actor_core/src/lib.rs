//! actor_core: the gameplay simulation for a tile-grid shooter.
//!
//! A [`map::Map`] owns a solid-tile grid and a generational actor registry
//! and advances them with a fixed-step tick: actor updates (AI decisions,
//! spawner pulses, force integration), disc-vs-disc and disc-vs-tile
//! collision, deferred reaping, and player respawn. Weapons resolve as
//! hitscan rays against the merged world (actor cylinders, wall faces,
//! floor and ceiling planes), spawned projectile actors, or melee arc
//! sweeps.
//!
//! All cross-references between actors are [`handle::ActorHandle`]s; a
//! handle to a reaped actor dereferences to `None` rather than to whatever
//! reused the slot. Rendering, input decoding, and audio playback live
//! outside this crate; audio enters through the [`audio::AudioSink`] seam.

pub mod actor;
pub mod ai;
pub mod audio;
pub mod controller;
pub mod faction;
pub mod geom;
pub mod grid;
pub mod handle;
pub mod map;
pub mod raycast;
pub mod weapon;

pub use actor::{Actor, Driver, HitZone};
pub use ai::AiBrain;
pub use audio::{AudioSink, NullAudio};
pub use controller::{Controller, PlayerController, PlayerIntent};
pub use faction::{are_hostile, Faction};
pub use grid::TileGrid;
pub use handle::ActorHandle;
pub use map::{Map, SpawnInfo};
pub use raycast::RayHit;
pub use weapon::Weapon;
