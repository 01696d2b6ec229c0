//! Edge source trait and error types.

use core::future::Future;

/// Error type for edge input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Pin or timer peripheral error.
    Io,
    /// The edge source has been torn down.
    Disconnected,
}

/// Async trait for PPM edge sources.
///
/// This trait abstracts where edge timestamps come from (GPIO interrupt,
/// timer input capture, PIO, a recorded trace in tests) so the capture
/// loop can be driven by any of them.
///
/// # Timestamps
///
/// Timestamps are a free-running microsecond counter truncated to 32 bits.
/// They are expected to wrap; [`PulseCapture`](crate::PulseCapture)
/// differences them with wrapping arithmetic.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait EdgeSource {
    /// Wait for the next edge of the configured polarity and return its
    /// timestamp in microseconds.
    fn wait_edge(&mut self) -> impl Future<Output = Result<u32, InputError>>;
}
