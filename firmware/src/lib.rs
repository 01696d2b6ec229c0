//! PPM RC receiver decoder for RP2040.
//!
//! This crate provides the embedded side of the decoder: it timestamps
//! edges of the receiver's PPM line, runs the capture state machine at
//! interrupt priority, and maps the latest widths into pilot commands once
//! per control cycle.
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | PPM in   | 2    | Receiver PPM/CPPM output (pull-down) |
//! | UART0 TX | 0    | Diagnostic channel dump |
//!
//! # Architecture
//!
//! Two executors share the [`SharedChannels`] array without locks:
//!
//! - **Capture task** (interrupt executor, high priority): waits for PPM
//!   edges and feeds [`PulseCapture`]; preempts everything else
//! - **Control task** (thread executor): ticks at the control period,
//!   maps the current widths through [`CommandBridge`] and publishes the
//!   result to [`SignalSink`]'s signal
//! - **Diagnostics task** (thread executor): writes a [`ChannelReport`]
//!   over UART whenever the control task hands it a snapshot
//!
//! Communication out of the control task uses Embassy's
//! [`Signal`](embassy_sync::signal::Signal) with "latest value wins"
//! semantics.
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`invert-ppm`**: Capture on falling edges for receivers with inverted PPM
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`ppm_core`] and
//! [`ppm_mapping`] for convenience.

#![no_std]

// Ensure mutually exclusive panic handlers
#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they define conflicting panic handlers");

// Re-export core types for convenience
pub use ppm_core::{
    CaptureState, Channel, ChannelReport, ChannelWidths, CommandSink, EdgeEvent, EdgeSource,
    FlyingMode, InputError, OutputError, PilotCommands, PulseCapture, SharedChannels,
    CHANNEL_COUNT, SYNC_GAP_US,
};
pub use ppm_mapping::{
    BridgeError, Calibration, CommandBridge, CommandMapper, MapperConfig, PowerRange,
    SwitchThresholds,
};

pub mod board;
pub mod command_output;
pub mod diagnostics;
pub mod edge_input;

pub use command_output::SignalSink;
pub use diagnostics::{DiagnosticsError, UartDiagnostics};
pub use edge_input::{PinEdgeSource, Polarity};
