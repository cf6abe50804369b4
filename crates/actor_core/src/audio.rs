//! Audio seam. The sim emits positional sound cues by name; a frontend
//! supplies the sink. Tests and headless runs use [`NullAudio`].

use glam::Vec3;

pub trait AudioSink {
    fn play_at(&self, name: &str, pos: Vec3);
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_at(&self, _name: &str, _pos: Vec3) {}
}
