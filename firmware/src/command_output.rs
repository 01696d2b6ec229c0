//! Command sink publishing to the vehicle control loop.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use ppm_core::{CommandSink, OutputError, PilotCommands};

/// Publishes each cycle's commands on a [`Signal`].
///
/// The vehicle loop takes the latest value with `wait()` or `try_take()`;
/// a value it never picked up is overwritten by the next cycle.
pub struct SignalSink {
    signal: &'static Signal<CriticalSectionRawMutex, PilotCommands>,
}

impl SignalSink {
    #[must_use]
    pub fn new(signal: &'static Signal<CriticalSectionRawMutex, PilotCommands>) -> Self {
        Self { signal }
    }

    /// The signal the vehicle loop should consume.
    #[must_use]
    pub fn signal(&self) -> &'static Signal<CriticalSectionRawMutex, PilotCommands> {
        self.signal
    }
}

impl CommandSink for SignalSink {
    async fn send(&mut self, commands: &PilotCommands) -> Result<(), OutputError> {
        self.signal.signal(*commands);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}
