//! Events that trigger phase transitions

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Negotiation finished (time synchronized or button pressed)
    Triggered,
    /// Remaining time reached zero
    Expired,
}
