//! Human-readable dump of raw channel widths for calibration.

use crate::types::{Channel, ChannelWidths};
use core::fmt;

/// Two-line text report of the raw widths, e.g.
///
/// ```text
/// Aile: 1492 Elev: 1503 Throt: 1080 Rudd: 1497
/// Switch1: 1900 Switch2: 1092
/// ```
///
/// The separator slot is not printed. The layout is meant for people
/// trimming a transmitter, not for parsing.
#[derive(Clone, Copy, Debug)]
pub struct ChannelReport<'a>(pub &'a ChannelWidths);

impl fmt::Display for ChannelReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.0;
        writeln!(
            f,
            "Aile: {:.0} Elev: {:.0} Throt: {:.0} Rudd: {:.0}",
            w.channel(Channel::Aileron),
            w.channel(Channel::Elevator),
            w.channel(Channel::Throttle),
            w.channel(Channel::Rudder),
        )?;
        write!(
            f,
            "Switch1: {:.0} Switch2: {:.0}",
            w.channel(Channel::ModeSwitch),
            w.channel(Channel::SwitchH),
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelReport<'_> {
    fn format(&self, f: defmt::Formatter) {
        let w = self.0;
        defmt::write!(
            f,
            "Aile: {=f32} Elev: {=f32} Throt: {=f32} Rudd: {=f32} Switch1: {=f32} Switch2: {=f32}",
            w.channel(Channel::Aileron),
            w.channel(Channel::Elevator),
            w.channel(Channel::Throttle),
            w.channel(Channel::Rudder),
            w.channel(Channel::ModeSwitch),
            w.channel(Channel::SwitchH),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::format;

    #[test]
    fn test_report_layout() {
        let widths = ChannelWidths::new([1492.0, 1503.0, 1080.0, 1497.0, 1900.0, 1092.0, 9000.0]);
        let text = format!("{}", ChannelReport(&widths));
        assert_eq!(
            text,
            "Aile: 1492 Elev: 1503 Throt: 1080 Rudd: 1497\nSwitch1: 1900 Switch2: 1092"
        );
    }

    #[test]
    fn test_report_zeroed() {
        let text = format!("{}", ChannelReport(&ChannelWidths::ZERO));
        assert!(text.starts_with("Aile: 0 Elev: 0"));
        assert!(text.ends_with("Switch2: 0"));
    }
}
