//! Per-installation calibration and mapper configuration.
//!
//! Customize these at compile-time by creating your own consts.

/// Stick calibration and output ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Pulse width at one end of stick travel (µs).
    pub input_min: f32,
    /// Pulse width at the other end of stick travel (µs).
    pub input_max: f32,
    /// Max roll and pitch angle in angle mode (°).
    pub max_angle: f32,
    /// Max roll and pitch rate in accro mode (°/s).
    pub max_rate: f32,
    /// Max yaw rate in every mode (°/s).
    pub max_yaw_rate: f32,
    /// Max climb or descent demand in altitude hold (m/s).
    pub max_vertical_speed: f32,
    /// Fraction of throttle travel, centered, that commands zero vertical speed.
    pub dead_zone: f32,
}

impl Calibration {
    /// Throttle width below which vertical speed is negative.
    #[inline]
    #[must_use]
    pub fn vertical_low_threshold(&self) -> f32 {
        self.input_min + self.dead_zone_margin()
    }

    /// Throttle width above which vertical speed is positive.
    #[inline]
    #[must_use]
    pub fn vertical_high_threshold(&self) -> f32 {
        self.input_max - self.dead_zone_margin()
    }

    /// Travel on each side of the dead zone.
    fn dead_zone_margin(&self) -> f32 {
        (self.input_max - self.input_min) * (1.0 - self.dead_zone) / 2.0
    }
}

/// Calibration of the reference transmitter (1.08 ms to 1.90 ms sticks).
pub const DEFAULT_CALIBRATION: Calibration = Calibration {
    input_min: 1080.0,
    input_max: 1900.0,
    max_angle: 45.0,
    max_rate: 135.0,
    max_yaw_rate: 135.0,
    max_vertical_speed: 2.0,
    dead_zone: 0.4,
};

/// Switch decision thresholds (µs).
///
/// These follow the wiring of the reference receiver and are not a logical
/// ordering. Mode lever (G switch): position 0 ≈ 1900 µs is disarmed,
/// position 1 ≈ 1500 µs is accro, position 2 ≈ 1092 µs is angle.
/// H switch: 1900 µs with the lever down reads `true`, 1090 µs with the
/// lever up reads `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchThresholds {
    /// Mode widths strictly above this disarm.
    pub disarm_above: f32,
    /// Mode widths strictly below this select angle mode.
    pub angle_below: f32,
    /// H switch widths strictly above this read `true`.
    pub switch_h_above: f32,
}

/// Thresholds of the reference receiver.
pub const DEFAULT_THRESHOLDS: SwitchThresholds = SwitchThresholds {
    disarm_above: 1800.0,
    angle_below: 1200.0,
    switch_h_above: 1500.0,
};

/// Power range of the motor outputs, supplied by the ESC driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerRange {
    /// Output at the lowest throttle position.
    pub min_power: i32,
    /// Output at the highest throttle position.
    pub max_throttle: i32,
}

impl PowerRange {
    #[must_use]
    pub const fn new(min_power: i32, max_throttle: i32) -> Self {
        Self {
            min_power,
            max_throttle,
        }
    }
}

/// Everything the mapper needs besides the channel widths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MapperConfig {
    pub calibration: Calibration,
    pub thresholds: SwitchThresholds,
    pub power: PowerRange,
    /// Clamp widths into the calibrated input range before interpolating.
    ///
    /// Off by default: out-of-range sticks extrapolate past the output
    /// bounds.
    pub clamp: bool,
}

impl MapperConfig {
    /// Reference calibration and thresholds with the ESC's power range.
    #[must_use]
    pub const fn new(power: PowerRange) -> Self {
        Self {
            calibration: DEFAULT_CALIBRATION,
            thresholds: DEFAULT_THRESHOLDS,
            power,
            clamp: false,
        }
    }

    #[must_use]
    pub const fn with_calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = calibration;
        self
    }

    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: SwitchThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub const fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }
}
