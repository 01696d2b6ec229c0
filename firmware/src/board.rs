//! Board and installation constants.

use embassy_time::Duration;
use ppm_mapping::{MapperConfig, PowerRange};

/// Control loop period (250 Hz).
pub const CONTROL_PERIOD: Duration = Duration::from_millis(4);

/// Control cycles between two diagnostic dumps (2 Hz at 250 Hz).
pub const DIAGNOSTIC_EVERY: u32 = 125;

/// Diagnostic UART baud rate.
pub const DIAGNOSTIC_BAUDRATE: u32 = 115_200;

/// ESC pulse range for the motor outputs (µs).
pub const ESC_POWER: PowerRange = PowerRange::new(1060, 1860);

/// Mapper configuration for this airframe.
pub const MAPPER_CONFIG: MapperConfig = MapperConfig::new(ESC_POWER);
