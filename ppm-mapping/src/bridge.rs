//! CommandBridge: connects the shared channel array to a command sink.

use crate::mapping::CommandMapper;
use ppm_core::{CommandSink, OutputError, PilotCommands, SharedChannels};

/// Polls the latest captured widths, maps them and forwards the result.
///
/// The bridge is the consumer side of the lock-free channel array: it never
/// waits for a complete frame, it just takes whatever the array holds when
/// [`process_one`](Self::process_one) runs. Call it from a periodic control
/// loop.
///
/// # Readiness
///
/// Before the first sync gap the array is all zeros and the mapped values
/// are meaningless, so nothing is sent and
/// [`BridgeError::NotReady`] is returned instead. A sink reporting
/// [`CommandSink::is_ready`] as false is skipped the same way, with
/// [`OutputError::NotReady`].
pub struct CommandBridge<'a, S> {
    channels: &'a SharedChannels,
    mapper: CommandMapper,
    sink: S,
}

impl<'a, S: CommandSink> CommandBridge<'a, S> {
    /// Create a new bridge reading `channels` and writing to `sink`.
    pub fn new(channels: &'a SharedChannels, mapper: CommandMapper, sink: S) -> Self {
        Self {
            channels,
            mapper,
            sink,
        }
    }

    /// Map the current widths and forward them once.
    ///
    /// Returns the commands that were sent, for logging and tests.
    pub async fn process_one(&mut self) -> Result<PilotCommands, BridgeError> {
        if !self.channels.is_ready() {
            return Err(BridgeError::NotReady);
        }
        if !self.sink.is_ready() {
            return Err(BridgeError::Output(OutputError::NotReady));
        }

        let widths = self.channels.snapshot();
        let commands = self.mapper.commands(&widths);
        self.sink
            .send(&commands)
            .await
            .map_err(BridgeError::Output)?;
        Ok(commands)
    }

    /// Get the mapper.
    pub fn mapper(&self) -> &CommandMapper {
        &self.mapper
    }

    /// Get a reference to the command sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the command sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Decompose the bridge, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Error type for bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// No sync gap seen yet; widths are still zero.
    NotReady,
    /// Error from the command sink.
    Output(OutputError),
}
