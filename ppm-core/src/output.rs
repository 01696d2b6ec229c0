//! Command sink trait and error types.

use crate::types::PilotCommands;
use core::future::Future;

/// Error type for command output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// The consumer is not accepting commands yet.
    NotReady,
    /// Consumer busy.
    Busy,
}

/// Async trait for consumers of mapped pilot commands.
///
/// The vehicle control loop, a telemetry link or a test recorder can all
/// sit behind this trait.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait CommandSink {
    /// Hand one cycle's commands to the consumer.
    fn send(&mut self, commands: &PilotCommands) -> impl Future<Output = Result<(), OutputError>>;

    /// Check if the consumer is ready to accept commands.
    fn is_ready(&self) -> bool;
}
