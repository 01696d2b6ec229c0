//! RC channel to flight command mapping.
//!
//! This crate turns the raw pulse widths captured by [`ppm_core`] into
//! engineering units for a multirotor control loop. It is designed to be
//! used from any periodic task, on target or on host.
//!
//! # Features
//!
//! - Angle-mode (±45°) and accro-mode (±135°/s) attitude demands
//! - Direct throttle onto an injected ESC power range
//! - Altitude-hold vertical speed with a centered throttle dead zone
//! - Flying-mode and H switch thresholding with configurable thresholds
//! - Optional input clamping
//! - A [`CommandBridge`] that polls the shared channels and feeds a
//!   [`CommandSink`](ppm_core::CommandSink)
//!
//! # Example
//!
//! ```
//! use ppm_core::{Channel, ChannelWidths, FlyingMode};
//! use ppm_mapping::{CommandMapper, MapperConfig, PowerRange};
//!
//! let mapper = CommandMapper::new(MapperConfig::new(PowerRange::new(1000, 1800)));
//!
//! let widths = ChannelWidths::new([1490.0; 7]).with(Channel::ModeSwitch, 1092.0);
//! let commands = mapper.commands(&widths);
//!
//! assert_eq!(commands.mode, FlyingMode::Angle);
//! assert_eq!(commands.elevator_angle, 0.0);
//! assert_eq!(commands.vertical_speed, 0.0);
//! ```
//!
//! # Channel Layout
//!
//! | Slot | Channel  | Used for                          |
//! |------|----------|-----------------------------------|
//! | 0    | Aileron  | roll angle / roll rate (inverted) |
//! | 1    | Elevator | pitch angle / pitch rate          |
//! | 2    | Throttle | throttle, vertical speed          |
//! | 3    | Rudder   | yaw rate                          |
//! | 4    | G switch | flying mode                       |
//! | 5    | H switch | boolean switch                    |
//! | 6    | -        | separator, ignored                |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bridge;
pub mod config;
pub mod mapping;

pub use bridge::{BridgeError, CommandBridge};
pub use config::{
    Calibration, MapperConfig, PowerRange, SwitchThresholds, DEFAULT_CALIBRATION,
    DEFAULT_THRESHOLDS,
};
pub use mapping::{interpolate, CommandMapper};
