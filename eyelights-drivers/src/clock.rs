//! Wall clock on the embassy time driver
//!
//! The board has no real-time clock, so the clock counts from an origin
//! chosen at construction. The countdown corrects for the origin with the
//! adjustment it gets from the time service.

use embassy_time::Instant;
use eyelights_hal::{UnixSeconds, WallClock};

/// Embassy-backed wall clock
pub struct EmbassyClock {
    /// Wall-clock time at tick zero
    origin: UnixSeconds,
}

impl EmbassyClock {
    /// Clock that reads `origin` at boot
    pub const fn new(origin: UnixSeconds) -> Self {
        Self { origin }
    }

    /// Clock that reads zero at boot
    pub const fn from_boot() -> Self {
        Self::new(UnixSeconds(0))
    }
}

impl Default for EmbassyClock {
    fn default() -> Self {
        Self::from_boot()
    }
}

impl WallClock for EmbassyClock {
    fn now(&self) -> UnixSeconds {
        let uptime = i64::try_from(Instant::now().as_secs()).unwrap_or(i64::MAX);
        self.origin + uptime
    }
}
