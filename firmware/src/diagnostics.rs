//! Raw channel dump over UART for transmitter calibration.

use core::fmt::Write;
use embassy_rp::uart::{Async, Error as UartError, UartTx};
use heapless::String;
use ppm_core::{ChannelReport, ChannelWidths};

/// Longest report line pair, with room for out-of-range widths.
pub const REPORT_CAPACITY: usize = 128;

/// Error type for diagnostic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum DiagnosticsError {
    /// Report did not fit in the line buffer.
    Overflow,
    /// UART transmit error.
    Io,
}

impl From<UartError> for DiagnosticsError {
    fn from(_: UartError) -> Self {
        DiagnosticsError::Io
    }
}

/// Writes [`ChannelReport`]s to a UART transmitter.
pub struct UartDiagnostics<'d> {
    tx: UartTx<'d, Async>,
    line: String<REPORT_CAPACITY>,
}

impl<'d> UartDiagnostics<'d> {
    /// Create a diagnostics writer on the given transmitter.
    #[must_use]
    pub fn new(tx: UartTx<'d, Async>) -> Self {
        Self {
            tx,
            line: String::new(),
        }
    }

    /// Format and send one report, terminated by CRLF.
    pub async fn write_report(&mut self, widths: &ChannelWidths) -> Result<(), DiagnosticsError> {
        self.line.clear();
        write!(self.line, "{}\r\n", ChannelReport(widths)).map_err(|_| DiagnosticsError::Overflow)?;
        self.tx.write(self.line.as_bytes()).await?;
        Ok(())
    }
}
