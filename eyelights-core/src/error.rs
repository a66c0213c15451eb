//! Error type for the countdown logic
//!
//! Every failure here is fatal to the firmware: a dead LED driver or radio
//! cannot be worked around, and a malformed remote time must not be
//! replaced by a guess.

use eyelights_display::SurfaceError;
use eyelights_hal::RadioError;

use crate::calendar::TimeError;

/// Errors surfaced by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// LED surface failure
    Surface(SurfaceError),
    /// Radio failure
    Radio(RadioError),
    /// Remote time could not be converted
    Time(TimeError),
}

/// Result alias using the crate error
pub type Result<T> = core::result::Result<T, Error>;

impl From<SurfaceError> for Error {
    fn from(err: SurfaceError) -> Self {
        Error::Surface(err)
    }
}

impl From<RadioError> for Error {
    fn from(err: RadioError) -> Self {
        Error::Radio(err)
    }
}

impl From<TimeError> for Error {
    fn from(err: TimeError) -> Self {
        Error::Time(err)
    }
}
