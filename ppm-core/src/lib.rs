//! Platform-agnostic PPM decoding: pulse capture, channel storage and traits.
//!
//! This crate provides the timing-sensitive half of an RC receiver decoder
//! without any platform-specific dependencies. It can be used both in
//! embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`types`]: Core data structures ([`ChannelWidths`], [`FlyingMode`], [`PilotCommands`])
//! - [`capture`]: Edge-driven pulse-width state machine ([`PulseCapture`])
//! - [`shared`]: Lock-free channel array shared with the control loop ([`SharedChannels`])
//! - [`input`]: Edge source trait ([`EdgeSource`])
//! - [`output`]: Command sink trait ([`CommandSink`])
//! - [`report`]: Diagnostic text dump of raw channels ([`ChannelReport`])
//!
//! # Signal
//!
//! A PPM frame is a train of pulses, one per channel, followed by an idle
//! gap longer than any channel pulse:
//!
//! ```text
//!  |<-ch0->|<-ch1->| ... |<-ch5->|<------ sync gap (> 4 ms) ------>|<-ch0->|
//! ```
//!
//! Each edge timestamp is differenced against the previous one; the gap
//! resynchronizes the channel index to zero.
//!
//! # Example
//!
//! ```rust
//! use ppm_core::{PulseCapture, SharedChannels};
//!
//! let channels = SharedChannels::new();
//! let mut capture = PulseCapture::new(&channels);
//!
//! let mut t: u32 = 0;
//! for width in [5000, 1500, 1200, 1800] {
//!     t = t.wrapping_add(width);
//!     capture.on_edge(t);
//! }
//!
//! assert!(channels.is_ready());
//! assert_eq!(channels.snapshot().get(0), 1500.0);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for interrupt handlers on small microcontrollers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod capture;
pub mod input;
pub mod output;
pub mod report;
pub mod shared;
pub mod types;

// Re-export main types at crate root
pub use capture::{CaptureState, EdgeEvent, PulseCapture, SYNC_GAP_US};
pub use input::{EdgeSource, InputError};
pub use output::{CommandSink, OutputError};
pub use report::ChannelReport;
pub use shared::SharedChannels;
pub use types::{Channel, ChannelWidths, FlyingMode, PilotCommands, CHANNEL_COUNT};
