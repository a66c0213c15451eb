//! Wall clock abstraction
//!
//! The countdown works in whole seconds since the Unix epoch. Boards
//! without a real-time clock typically count from an arbitrary origin;
//! the countdown only ever uses differences, plus the one-shot offset
//! obtained from the time service.

use core::ops::{Add, Sub};

/// Units-safe wrapper for Unix timestamps (seconds since 1970-01-01 00:00:00 UTC)
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnixSeconds(pub i64);

impl UnixSeconds {
    /// Get the underlying i64 value
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Signed number of seconds from `earlier` to `self`
    pub const fn seconds_since(self, earlier: UnixSeconds) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<i64> for UnixSeconds {
    type Output = UnixSeconds;

    fn add(self, seconds: i64) -> UnixSeconds {
        UnixSeconds(self.0.saturating_add(seconds))
    }
}

impl Sub<i64> for UnixSeconds {
    type Output = UnixSeconds;

    fn sub(self, seconds: i64) -> UnixSeconds {
        UnixSeconds(self.0.saturating_sub(seconds))
    }
}

/// Source of the current wall-clock time
pub trait WallClock {
    /// Current time in whole seconds
    fn now(&self) -> UnixSeconds;
}

impl<T: WallClock + ?Sized> WallClock for &T {
    fn now(&self) -> UnixSeconds {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_since() {
        let start = UnixSeconds(1_000);
        let later = start + 90;
        assert_eq!(later.seconds_since(start), 90);
        assert_eq!(start.seconds_since(later), -90);
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(UnixSeconds(i64::MAX) + 1, UnixSeconds(i64::MAX));
        assert_eq!(UnixSeconds(i64::MIN) - 1, UnixSeconds(i64::MIN));
    }
}
