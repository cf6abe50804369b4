//! Generational actor handles.
//!
//! A handle packs a 16-bit salt (uid) with a 16-bit registry slot index.
//! Slots recycle, salts do not: a stale handle to a reaped actor fails the
//! salt comparison and dereferences to `None` instead of a stranger.

/// Packed `(uid << 16) | index` reference to a registry slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorHandle(pub u32);

impl ActorHandle {
    /// Sentinel that never matches a live actor.
    pub const INVALID: ActorHandle = ActorHandle(0xffff_ffff);

    pub const MAX_UID: u32 = 0xfffe;
    pub const MAX_INDEX: u32 = 0xfffe;

    #[inline]
    pub fn new(uid: u32, index: u32) -> Self {
        debug_assert!(uid <= Self::MAX_UID);
        debug_assert!(index <= Self::MAX_INDEX);
        Self((uid << 16) | (index & 0xffff))
    }

    #[inline]
    pub fn uid(self) -> u32 {
        self.0 >> 16
    }

    #[inline]
    pub fn index(self) -> usize {
        (self.0 & 0xffff) as usize
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for ActorHandle {
    fn default() -> Self {
        Self::INVALID
    }
}
