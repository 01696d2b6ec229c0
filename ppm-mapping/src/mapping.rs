//! Channel-width to flight-command mapping.
//!
//! Every stick channel is a straight line from the calibrated width range
//! to an output range. There is no clamping unless the config asks for it,
//! so a width outside the calibration extrapolates past the output bounds.

use crate::config::MapperConfig;
use ppm_core::{Channel, ChannelWidths, FlyingMode, PilotCommands};

/// Linear interpolation of `x` from `[x0, x1]` onto `[y0, y1]`.
///
/// Not clamped. A degenerate input range maps everything to `y0`.
#[inline]
#[must_use]
pub fn interpolate(x: f32, x0: f32, x1: f32, y0: f32, y1: f32) -> f32 {
    if x1 == x0 {
        return y0;
    }
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// Stateless translator from raw widths to engineering units.
///
/// All operations are total: zeroed widths (no frame yet) or garbage give a
/// defined but meaningless result. Gate on
/// [`SharedChannels::is_ready`](ppm_core::SharedChannels::is_ready) before
/// trusting the output.
///
/// Aileron outputs are sign-inverted (stick right = negative roll demand);
/// elevator and rudder are not.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandMapper {
    config: MapperConfig,
}

impl CommandMapper {
    #[must_use]
    pub const fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Roll demand in angle mode (°).
    #[must_use]
    pub fn aileron_angle(&self, widths: &ChannelWidths) -> f32 {
        let max = self.config.calibration.max_angle;
        -self.stick(widths, Channel::Aileron, -max, max)
    }

    /// Pitch demand in angle mode (°).
    #[must_use]
    pub fn elevator_angle(&self, widths: &ChannelWidths) -> f32 {
        let max = self.config.calibration.max_angle;
        self.stick(widths, Channel::Elevator, -max, max)
    }

    /// Roll rate demand in accro mode (°/s).
    #[must_use]
    pub fn aileron_rate(&self, widths: &ChannelWidths) -> f32 {
        let max = self.config.calibration.max_rate;
        -self.stick(widths, Channel::Aileron, -max, max)
    }

    /// Pitch rate demand in accro mode (°/s).
    #[must_use]
    pub fn elevator_rate(&self, widths: &ChannelWidths) -> f32 {
        let max = self.config.calibration.max_rate;
        self.stick(widths, Channel::Elevator, -max, max)
    }

    /// Direct throttle in ESC power units, truncated toward zero.
    #[must_use]
    pub fn throttle(&self, widths: &ChannelWidths) -> i32 {
        let power = self.config.power;
        self.stick(
            widths,
            Channel::Throttle,
            power.min_power as f32,
            power.max_throttle as f32,
        ) as i32
    }

    /// Climb demand for altitude hold (m/s).
    ///
    /// The throttle stick has three zones: the low part of travel maps onto
    /// `[-max, 0]`, the high part onto `[0, max]`, and the centered dead
    /// zone in between returns exactly zero.
    #[must_use]
    pub fn vertical_speed(&self, widths: &ChannelWidths) -> f32 {
        let cal = &self.config.calibration;
        let x = self.input(widths.channel(Channel::Throttle));
        let low = cal.vertical_low_threshold();
        let high = cal.vertical_high_threshold();

        if x < low {
            interpolate(x, cal.input_min, low, -cal.max_vertical_speed, 0.0)
        } else if x > high {
            interpolate(x, high, cal.input_max, 0.0, cal.max_vertical_speed)
        } else {
            0.0
        }
    }

    /// Yaw rate demand (°/s), used in every mode.
    #[must_use]
    pub fn rudder(&self, widths: &ChannelWidths) -> f32 {
        let max = self.config.calibration.max_yaw_rate;
        self.stick(widths, Channel::Rudder, -max, max)
    }

    /// H switch position. A plain threshold, no interpolation.
    #[must_use]
    pub fn switch_h(&self, widths: &ChannelWidths) -> bool {
        widths.channel(Channel::SwitchH) > self.config.thresholds.switch_h_above
    }

    /// Flying mode selected by the G lever.
    ///
    /// Highest widths disarm, lowest select angle mode, the middle position
    /// selects accro. See [`SwitchThresholds`](crate::SwitchThresholds) for
    /// the lever positions.
    #[must_use]
    pub fn flying_mode(&self, widths: &ChannelWidths) -> FlyingMode {
        let x = widths.channel(Channel::ModeSwitch);
        let thresholds = &self.config.thresholds;
        if x > thresholds.disarm_above {
            FlyingMode::Disarmed
        } else if x < thresholds.angle_below {
            FlyingMode::Angle
        } else {
            FlyingMode::Accro
        }
    }

    /// All commands for one control cycle, computed from the same widths.
    #[must_use]
    pub fn commands(&self, widths: &ChannelWidths) -> PilotCommands {
        PilotCommands {
            mode: self.flying_mode(widths),
            aileron_angle: self.aileron_angle(widths),
            elevator_angle: self.elevator_angle(widths),
            aileron_rate: self.aileron_rate(widths),
            elevator_rate: self.elevator_rate(widths),
            throttle: self.throttle(widths),
            vertical_speed: self.vertical_speed(widths),
            yaw_rate: self.rudder(widths),
            switch_h: self.switch_h(widths),
        }
    }

    fn stick(&self, widths: &ChannelWidths, channel: Channel, lo: f32, hi: f32) -> f32 {
        let cal = &self.config.calibration;
        interpolate(
            self.input(widths.channel(channel)),
            cal.input_min,
            cal.input_max,
            lo,
            hi,
        )
    }

    /// Apply the opt-in clamp to a raw width.
    fn input(&self, width: f32) -> f32 {
        if !self.config.clamp {
            return width;
        }
        let cal = &self.config.calibration;
        let (lo, hi) = if cal.input_min <= cal.input_max {
            (cal.input_min, cal.input_max)
        } else {
            (cal.input_max, cal.input_min)
        };
        if width < lo {
            lo
        } else if width > hi {
            hi
        } else {
            width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PowerRange, SwitchThresholds, DEFAULT_CALIBRATION, DEFAULT_THRESHOLDS};
    use ppm_core::CHANNEL_COUNT;

    const POWER: PowerRange = PowerRange::new(1000, 1800);

    fn mapper() -> CommandMapper {
        CommandMapper::new(MapperConfig::new(POWER))
    }

    fn centered() -> ChannelWidths {
        ChannelWidths::new([1490.0; CHANNEL_COUNT])
    }

    fn close(a: f32, b: f32) -> bool {
        let d = a - b;
        d < 1e-3 && d > -1e-3
    }

    #[test]
    fn test_interpolate_endpoints() {
        assert_eq!(interpolate(1080.0, 1080.0, 1900.0, -45.0, 45.0), -45.0);
        assert_eq!(interpolate(1900.0, 1080.0, 1900.0, -45.0, 45.0), 45.0);
        assert_eq!(interpolate(1490.0, 1080.0, 1900.0, -45.0, 45.0), 0.0);
    }

    #[test]
    fn test_interpolate_monotonic() {
        let mut prev = f32::NEG_INFINITY;
        let mut x = 1080.0;
        while x <= 1900.0 {
            let y = interpolate(x, 1080.0, 1900.0, -135.0, 135.0);
            assert!(y >= prev, "not monotonic at {}", x);
            prev = y;
            x += 5.0;
        }
    }

    #[test]
    fn test_interpolate_extrapolates() {
        assert!(interpolate(2000.0, 1080.0, 1900.0, -45.0, 45.0) > 45.0);
        assert!(interpolate(1000.0, 1080.0, 1900.0, -45.0, 45.0) < -45.0);
    }

    #[test]
    fn test_interpolate_degenerate_range() {
        assert_eq!(interpolate(1500.0, 1200.0, 1200.0, -2.0, 0.0), -2.0);
    }

    #[test]
    fn test_aileron_is_negated_interpolation() {
        let m = mapper();
        for x in [1000.0, 1080.0, 1234.0, 1490.0, 1777.0, 1900.0, 2100.0] {
            let w = centered().with(Channel::Aileron, x);
            assert_eq!(
                m.aileron_angle(&w),
                -interpolate(x, 1080.0, 1900.0, -45.0, 45.0)
            );
            assert_eq!(
                m.aileron_rate(&w),
                -interpolate(x, 1080.0, 1900.0, -135.0, 135.0)
            );
        }
    }

    #[test]
    fn test_angle_endpoints() {
        let m = mapper();
        let low = ChannelWidths::new([1080.0; CHANNEL_COUNT]);
        let high = ChannelWidths::new([1900.0; CHANNEL_COUNT]);

        assert_eq!(m.aileron_angle(&low), 45.0);
        assert_eq!(m.aileron_angle(&high), -45.0);
        assert_eq!(m.elevator_angle(&low), -45.0);
        assert_eq!(m.elevator_angle(&high), 45.0);
    }

    #[test]
    fn test_rate_endpoints() {
        let m = mapper();
        let low = ChannelWidths::new([1080.0; CHANNEL_COUNT]);
        let high = ChannelWidths::new([1900.0; CHANNEL_COUNT]);

        assert_eq!(m.aileron_rate(&high), -135.0);
        assert_eq!(m.elevator_rate(&low), -135.0);
        assert_eq!(m.elevator_rate(&high), 135.0);
    }

    #[test]
    fn test_rudder_not_inverted() {
        let m = mapper();
        assert_eq!(m.rudder(&centered().with(Channel::Rudder, 1080.0)), -135.0);
        assert_eq!(m.rudder(&centered().with(Channel::Rudder, 1900.0)), 135.0);
        assert_eq!(m.rudder(&centered()), 0.0);
    }

    #[test]
    fn test_throttle_uses_power_range() {
        let m = mapper();
        assert_eq!(m.throttle(&centered().with(Channel::Throttle, 1080.0)), 1000);
        assert_eq!(m.throttle(&centered().with(Channel::Throttle, 1900.0)), 1800);
        assert_eq!(m.throttle(&centered().with(Channel::Throttle, 1490.0)), 1400);
    }

    #[test]
    fn test_throttle_truncates() {
        let m = mapper();
        // 1081 µs is 800/820 of a unit above min power.
        assert_eq!(m.throttle(&centered().with(Channel::Throttle, 1081.0)), 1000);
    }

    #[test]
    fn test_vertical_speed_zones() {
        let m = mapper();
        let low = DEFAULT_CALIBRATION.vertical_low_threshold();
        let high = DEFAULT_CALIBRATION.vertical_high_threshold();
        let at = |x: f32| m.vertical_speed(&centered().with(Channel::Throttle, x));

        assert!(at(low - 1.0) < 0.0);
        assert_eq!(at((low + high) / 2.0), 0.0);
        assert!(at(high + 1.0) > 0.0);
    }

    #[test]
    fn test_vertical_speed_endpoints() {
        let m = mapper();
        let at = |x: f32| m.vertical_speed(&centered().with(Channel::Throttle, x));

        assert_eq!(at(1080.0), -2.0);
        assert!(close(at(1900.0), 2.0));
    }

    #[test]
    fn test_vertical_speed_dead_zone_is_flat() {
        let m = mapper();
        let at = |x: f32| m.vertical_speed(&centered().with(Channel::Throttle, x));

        for x in [1330.0, 1400.0, 1490.0, 1600.0, 1650.0] {
            assert_eq!(at(x), 0.0, "x = {}", x);
        }
    }

    #[test]
    fn test_vertical_speed_literal_width_thresholds_fall_in_dead_zone() {
        // 1080 + 1900 * 0.3 = 1650 and 1900 - 1900 * 0.3 = 1330 would cross
        // over; the span-based band is ~1326..~1654 and contains both.
        let m = mapper();
        let at = |x: f32| m.vertical_speed(&centered().with(Channel::Throttle, x));

        assert_eq!(at(1649.0), 0.0);
        assert_eq!(at(1490.0), 0.0);
        assert_eq!(at(1331.0), 0.0);

        assert!(at(1320.0) < 0.0);
        assert!(at(1660.0) > 0.0);
    }

    #[test]
    fn test_vertical_speed_continuous_at_thresholds() {
        let m = mapper();
        let low = DEFAULT_CALIBRATION.vertical_low_threshold();
        let high = DEFAULT_CALIBRATION.vertical_high_threshold();
        let at = |x: f32| m.vertical_speed(&centered().with(Channel::Throttle, x));

        assert!(close(at(low - 0.01), 0.0));
        assert!(close(at(high + 0.01), 0.0));
    }

    #[test]
    fn test_switch_h_threshold() {
        let m = mapper();
        assert!(!m.switch_h(&centered().with(Channel::SwitchH, 1090.0)));
        assert!(!m.switch_h(&centered().with(Channel::SwitchH, 1500.0)));
        assert!(m.switch_h(&centered().with(Channel::SwitchH, 1501.0)));
        assert!(m.switch_h(&centered().with(Channel::SwitchH, 1900.0)));
    }

    #[test]
    fn test_flying_mode_boundaries() {
        let m = mapper();
        let mode = |x: f32| m.flying_mode(&centered().with(Channel::ModeSwitch, x));

        assert_eq!(mode(1900.0), FlyingMode::Disarmed);
        assert_eq!(mode(1801.0), FlyingMode::Disarmed);
        assert_eq!(mode(1800.0), FlyingMode::Accro);
        assert_eq!(mode(1799.0), FlyingMode::Accro);
        assert_eq!(mode(1500.0), FlyingMode::Accro);
        assert_eq!(mode(1201.0), FlyingMode::Accro);
        assert_eq!(mode(1200.0), FlyingMode::Accro);
        assert_eq!(mode(1199.0), FlyingMode::Angle);
        assert_eq!(mode(1092.0), FlyingMode::Angle);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = MapperConfig::new(POWER).with_thresholds(SwitchThresholds {
            disarm_above: 1700.0,
            angle_below: 1300.0,
            ..DEFAULT_THRESHOLDS
        });
        let m = CommandMapper::new(config);
        let mode = |x: f32| m.flying_mode(&centered().with(Channel::ModeSwitch, x));

        assert_eq!(mode(1750.0), FlyingMode::Disarmed);
        assert_eq!(mode(1250.0), FlyingMode::Angle);
        assert_eq!(mode(1500.0), FlyingMode::Accro);
    }

    #[test]
    fn test_clamp_opt_in() {
        let loose = mapper();
        let clamped = CommandMapper::new(MapperConfig::new(POWER).with_clamp(true));
        let w = centered()
            .with(Channel::Elevator, 2000.0)
            .with(Channel::Throttle, 1000.0);

        assert!(loose.elevator_angle(&w) > 45.0);
        assert_eq!(clamped.elevator_angle(&w), 45.0);
        assert!(loose.throttle(&w) < 1000);
        assert_eq!(clamped.throttle(&w), 1000);
        assert_eq!(clamped.vertical_speed(&w), -2.0);
    }

    #[test]
    fn test_zeroed_widths_are_defined() {
        let m = mapper();
        let c = m.commands(&ChannelWidths::ZERO);
        assert_eq!(c.mode, FlyingMode::Angle);
        assert!(!c.switch_h);
        assert!(c.vertical_speed < -2.0);
    }

    #[test]
    fn test_mapper_is_idempotent() {
        let m = mapper();
        let w = ChannelWidths::new([1200.0, 1700.0, 1300.0, 1650.0, 1500.0, 1900.0, 9000.0]);
        assert_eq!(m.commands(&w), m.commands(&w));
        assert_eq!(m.vertical_speed(&w), m.vertical_speed(&w));
    }

    #[test]
    fn test_commands_aggregate() {
        let m = mapper();
        let w = ChannelWidths::new([1080.0, 1900.0, 1900.0, 1490.0, 1900.0, 1900.0, 0.0]);
        let c = m.commands(&w);

        assert_eq!(c.mode, FlyingMode::Disarmed);
        assert_eq!(c.aileron_angle, 45.0);
        assert_eq!(c.elevator_rate, 135.0);
        assert_eq!(c.throttle, 1800);
        assert!(c.vertical_speed > 0.0);
        assert_eq!(c.yaw_rate, 0.0);
        assert!(c.switch_h);
    }
}
