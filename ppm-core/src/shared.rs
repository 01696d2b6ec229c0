//! Lock-free channel storage shared between capture and the control loop.

use crate::types::{ChannelWidths, CHANNEL_COUNT};
use portable_atomic::{AtomicBool, AtomicF32, Ordering};

/// Channel width array with one writer (the edge interrupt) and one reader
/// (the control loop).
///
/// Every slot is an independent atomic, so a reader never observes a
/// half-written `f32`. There is no frame-level lock: a [`snapshot`] taken
/// while capture is mid-frame returns the new widths for slots already
/// written and the previous frame's widths for the rest. Slots are always
/// written in increasing index order, so a torn snapshot is the new frame up
/// to some index followed by the old frame. A full frame takes a few
/// milliseconds on the wire; control-loop consumers accept this window.
///
/// [`snapshot`]: SharedChannels::snapshot
pub struct SharedChannels {
    widths: [AtomicF32; CHANNEL_COUNT],
    ready: AtomicBool,
}

impl SharedChannels {
    /// Zeroed storage, suitable for a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            widths: [
                AtomicF32::new(0.0),
                AtomicF32::new(0.0),
                AtomicF32::new(0.0),
                AtomicF32::new(0.0),
                AtomicF32::new(0.0),
                AtomicF32::new(0.0),
                AtomicF32::new(0.0),
            ],
            ready: AtomicBool::new(false),
        }
    }

    /// Store a width into one slot. Indices past the last slot are ignored.
    #[inline]
    pub fn store(&self, index: usize, width: f32) {
        if let Some(slot) = self.widths.get(index) {
            slot.store(width, Ordering::Release);
        }
    }

    /// Load a single slot. Indices past the last slot read as zero.
    #[inline]
    #[must_use]
    pub fn load(&self, index: usize) -> f32 {
        self.widths
            .get(index)
            .map_or(0.0, |slot| slot.load(Ordering::Acquire))
    }

    /// Copy all slots, lowest index first.
    ///
    /// See the type-level documentation for the torn-read window.
    #[must_use]
    pub fn snapshot(&self) -> ChannelWidths {
        let mut widths = [0.0; CHANNEL_COUNT];
        for (dst, slot) in widths.iter_mut().zip(self.widths.iter()) {
            *dst = slot.load(Ordering::Acquire);
        }
        ChannelWidths(widths)
    }

    /// Whether at least one sync gap has been observed.
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub(crate) fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }
}

impl Default for SharedChannels {
    fn default() -> Self {
        Self::new()
    }
}
