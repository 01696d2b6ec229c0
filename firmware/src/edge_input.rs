//! GPIO edge source for the PPM line.

use embassy_time::Instant;
use embedded_hal_async::digital::Wait;
use ppm_core::{EdgeSource, InputError};

/// Which transition marks a pulse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Polarity {
    Rising,
    Falling,
}

impl Polarity {
    /// Polarity selected by the `invert-ppm` feature.
    #[must_use]
    pub const fn configured() -> Self {
        if cfg!(feature = "invert-ppm") {
            Polarity::Falling
        } else {
            Polarity::Rising
        }
    }
}

/// Edge source over any async-waitable input pin.
///
/// Timestamps come from the embassy time driver (1 MHz tick on RP2040),
/// truncated to 32 bits. The capture task should run at the highest
/// priority so the timestamp is taken as close to the edge as possible.
pub struct PinEdgeSource<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: Wait> PinEdgeSource<P> {
    /// Create an edge source on `pin`.
    #[must_use]
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    #[inline]
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl<P: Wait> EdgeSource for PinEdgeSource<P> {
    async fn wait_edge(&mut self) -> Result<u32, InputError> {
        match self.polarity {
            Polarity::Rising => self.pin.wait_for_rising_edge().await,
            Polarity::Falling => self.pin.wait_for_falling_edge().await,
        }
        .map_err(|_| InputError::Io)?;

        Ok(Instant::now().as_micros() as u32)
    }
}
