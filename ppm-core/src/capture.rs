//! Edge-driven PPM pulse-width capture.

use crate::input::{EdgeSource, InputError};
use crate::shared::SharedChannels;
use crate::types::CHANNEL_COUNT;

/// Any inter-edge interval longer than this (µs) is the frame sync gap.
pub const SYNC_GAP_US: u32 = 4000;

/// Where the decoder is within the PPM frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureState {
    /// No sync gap seen yet; widths are measured but discarded.
    AwaitingSync,
    /// The next measured width belongs to this slot.
    Filling(usize),
}

impl CaptureState {
    /// State after an edge that measured `width` microseconds.
    ///
    /// A sync gap always restarts at slot 0. Otherwise the slot advances by
    /// one and saturates at the last slot, so frames with extra pulses keep
    /// overwriting the separator slot instead of running past the array.
    #[must_use]
    pub fn next(self, width: u32) -> Self {
        if width > SYNC_GAP_US {
            return CaptureState::Filling(0);
        }
        match self {
            CaptureState::AwaitingSync => CaptureState::AwaitingSync,
            CaptureState::Filling(index) if index + 1 < CHANNEL_COUNT => {
                CaptureState::Filling(index + 1)
            }
            filling => filling,
        }
    }
}

/// What a single edge did to the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeEvent {
    /// Still waiting for the first sync gap.
    Unsynced,
    /// A width was stored into the given slot.
    Stored { index: usize, width: u32 },
    /// A sync gap ended the frame. `first` is set on the very first sync.
    Sync { width: u32, first: bool },
}

/// PPM decoder state machine, invoked once per signal edge.
///
/// The capture owns the timing state and is the only writer of the
/// [`SharedChannels`] it was built with. Call [`on_edge`] from the edge
/// interrupt (or the highest-priority task) with a free-running microsecond
/// counter; edges must all be of the same polarity.
///
/// Malformed frames are tolerated silently: slots not reached keep their
/// previous value, and extra pulses land in the last slot.
///
/// [`on_edge`]: PulseCapture::on_edge
pub struct PulseCapture<'a> {
    channels: &'a SharedChannels,
    state: CaptureState,
    last_edge_us: u32,
}

impl<'a> PulseCapture<'a> {
    /// Create a capture writing into `channels`. The first edge is measured
    /// against timestamp zero.
    ///
    /// On hardware the counter has usually run for more than
    /// [`SYNC_GAP_US`] by the time the first edge arrives, so that edge is
    /// taken as a sync gap even if it falls mid-frame. The array then goes
    /// ready with misaligned slots until the real gap of the next frame
    /// realigns it, about one frame later.
    #[must_use]
    pub const fn new(channels: &'a SharedChannels) -> Self {
        Self {
            channels,
            state: CaptureState::AwaitingSync,
            last_edge_us: 0,
        }
    }

    /// Process one edge at `timestamp_us`.
    ///
    /// The width is the wrapping difference to the previous edge, so a
    /// 32-bit microsecond counter rolling over mid-frame still yields the
    /// right interval.
    pub fn on_edge(&mut self, timestamp_us: u32) -> EdgeEvent {
        let width = timestamp_us.wrapping_sub(self.last_edge_us);
        self.last_edge_us = timestamp_us;

        let stored = match self.state {
            CaptureState::Filling(index) => {
                self.channels.store(index, width as f32);
                Some(index)
            }
            CaptureState::AwaitingSync => None,
        };

        let was_synced = self.is_synced();
        self.state = self.state.next(width);

        if width > SYNC_GAP_US {
            if !self.channels.is_ready() {
                #[cfg(feature = "defmt")]
                defmt::debug!("PPM sync acquired (gap {=u32} us)", width);
                self.channels.mark_ready();
            }
            return EdgeEvent::Sync {
                width,
                first: !was_synced,
            };
        }

        match stored {
            Some(index) => EdgeEvent::Stored { index, width },
            None => EdgeEvent::Unsynced,
        }
    }

    /// Wait for the next edge from `source` and process it.
    pub async fn capture_from<E: EdgeSource>(
        &mut self,
        source: &mut E,
    ) -> Result<EdgeEvent, InputError> {
        let timestamp_us = source.wait_edge().await?;
        Ok(self.on_edge(timestamp_us))
    }

    /// Current position in the frame.
    #[inline]
    #[must_use]
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Timestamp of the last processed edge.
    #[inline]
    #[must_use]
    pub fn last_edge_us(&self) -> u32 {
        self.last_edge_us
    }

    /// Whether a sync gap has been seen by this capture.
    #[inline]
    #[must_use]
    pub fn is_synced(&self) -> bool {
        matches!(self.state, CaptureState::Filling(_))
    }

    /// The channel storage this capture writes to.
    #[inline]
    #[must_use]
    pub fn channels(&self) -> &'a SharedChannels {
        self.channels
    }
}
