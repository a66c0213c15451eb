//! Calendar conversions
//!
//! The time service reports calendar fields; the countdown works in
//! [`UnixSeconds`]. Conversion treats the remote time as UTC.

use eyelights_hal::{CurrentTime, UnixSeconds};
use time::{Date, Month, PrimitiveDateTime, Time};

/// 2022-01-01T00:00:00 UTC, the default countdown target
pub const NEW_YEAR_2022: UnixSeconds = UnixSeconds(1_640_995_200);

/// Calendar conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Month outside 1-12
    InvalidMonth,
    /// Day does not exist in the given month and year
    InvalidDate,
    /// Hours, minutes or seconds out of range
    InvalidTime,
}

/// Convert calendar fields to seconds since the Unix epoch
pub fn to_unix_seconds(t: &CurrentTime) -> Result<UnixSeconds, TimeError> {
    let month = Month::try_from(t.month).map_err(|_| TimeError::InvalidMonth)?;
    let date = Date::from_calendar_date(i32::from(t.year), month, t.day)
        .map_err(|_| TimeError::InvalidDate)?;
    let time =
        Time::from_hms(t.hours, t.minutes, t.seconds).map_err(|_| TimeError::InvalidTime)?;

    Ok(UnixSeconds(
        PrimitiveDateTime::new(date, time)
            .assume_utc()
            .unix_timestamp(),
    ))
}
