//! Core receiver types: Channel, ChannelWidths, FlyingMode, PilotCommands.

/// Number of slots in a PPM frame: six control channels plus the separator.
pub const CHANNEL_COUNT: usize = 7;

/// Channel slot assignment within a PPM frame.
///
/// The order is fixed by the receiver wiring: sticks first, then switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(usize)]
pub enum Channel {
    Aileron = 0,
    Elevator = 1,
    Throttle = 2,
    Rudder = 3,
    /// Three-position mode lever (G switch).
    ModeSwitch = 4,
    /// Two-position lever (H switch).
    SwitchH = 5,
    /// Slot reached by the sync gap itself; never read by the mapper.
    Separator = 6,
}

impl Channel {
    /// Slot index of this channel in [`ChannelWidths`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Pulse widths of one frame, in microseconds.
///
/// Widths are integral but kept as `f32` so the mapper can interpolate
/// without conversions. A default value is all zeros, which is what the
/// decoder holds before the first frame.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelWidths(pub [f32; CHANNEL_COUNT]);

impl ChannelWidths {
    /// All-zero widths (no frame received yet).
    pub const ZERO: Self = Self([0.0; CHANNEL_COUNT]);

    #[must_use]
    pub const fn new(widths: [f32; CHANNEL_COUNT]) -> Self {
        Self(widths)
    }

    /// Width of the given slot index. Out-of-range indices read as zero.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> f32 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    /// Width of a named channel.
    #[inline]
    #[must_use]
    pub fn channel(&self, channel: Channel) -> f32 {
        self.0[channel.index()]
    }

    /// Builder-style setter, mostly useful in tests and simulations.
    #[must_use]
    pub fn with(mut self, channel: Channel, width: f32) -> Self {
        self.0[channel.index()] = width;
        self
    }
}

/// Vehicle flying mode.
///
/// Only [`Disarmed`](FlyingMode::Disarmed), [`Accro`](FlyingMode::Accro)
/// and [`Angle`](FlyingMode::Angle) come out of the receiver; the other
/// states belong to the vehicle state machine that consumes this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlyingMode {
    Initialization,
    Starting,
    Safety,
    Disarmed,
    /// Sticks command angular rates.
    Accro,
    /// Sticks command attitude angles.
    Angle,
}

/// Everything the control loop needs from the sticks for one cycle.
///
/// Angles in degrees, rates in degrees per second, vertical speed in m/s,
/// throttle in the units of the injected ESC power range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PilotCommands {
    pub mode: FlyingMode,
    pub aileron_angle: f32,
    pub elevator_angle: f32,
    pub aileron_rate: f32,
    pub elevator_rate: f32,
    pub throttle: i32,
    pub vertical_speed: f32,
    pub yaw_rate: f32,
    pub switch_h: bool,
}

impl PilotCommands {
    /// Attitude demand for the current mode: angles in angle mode,
    /// rates otherwise.
    #[must_use]
    pub fn attitude_demand(&self) -> (f32, f32) {
        match self.mode {
            FlyingMode::Angle => (self.aileron_angle, self.elevator_angle),
            _ => (self.aileron_rate, self.elevator_rate),
        }
    }
}
