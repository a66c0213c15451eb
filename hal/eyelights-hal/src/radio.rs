//! Wireless radio abstractions
//!
//! The countdown only needs a tiny slice of a wireless stack: advertise
//! that it wants the time, notice a peer connecting, pair with it, read
//! the peer's current time once and hang up. Everything else (GATT
//! discovery, bonding storage, link layer) belongs to the board's radio
//! stack.

/// Errors reported by the radio stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// Radio could not be initialized or stopped responding
    NotReady,
    /// Advertising could not be started
    AdvertisingFailed,
    /// Pairing was rejected or failed
    PairingFailed,
    /// Peer does not expose the current-time service
    ServiceNotFound,
    /// Reading the time characteristic failed
    ReadFailed,
    /// Link dropped while an operation was in flight
    Disconnected,
}

/// Calendar time as delivered by a current-time service
///
/// Fields are raw values from the peer and have not been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurrentTime {
    /// Full year, e.g. 2021
    pub year: u16,
    /// Month 1-12
    pub month: u8,
    /// Day of month 1-31
    pub day: u8,
    /// Hours 0-23
    pub hours: u8,
    /// Minutes 0-59
    pub minutes: u8,
    /// Seconds 0-59
    pub seconds: u8,
    /// Day of week, 1 = Monday .. 7 = Sunday, 0 = unknown
    pub day_of_week: u8,
}

impl CurrentTime {
    /// Create a time value with an unknown day of week
    pub const fn new(year: u16, month: u8, day: u8, hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
            day_of_week: 0,
        }
    }
}

/// One connection to a peer that may provide the current time
pub trait TimeConnection {
    /// Check if the link is paired (encrypted)
    fn is_paired(&self) -> bool;

    /// Start pairing with the peer
    ///
    /// Pairing may complete asynchronously; callers poll [`is_paired`](Self::is_paired).
    fn pair(&mut self) -> Result<(), RadioError>;

    /// Read the peer's current time
    fn current_time(&mut self) -> Result<CurrentTime, RadioError>;

    /// Terminate the connection
    fn disconnect(&mut self) -> Result<(), RadioError>;
}

/// Wireless radio with zero or more active connections
pub trait Radio {
    /// Connection type handed out by this radio
    type Connection: TimeConnection;

    /// Start advertising a solicitation for the current-time service
    ///
    /// - `name`: complete local name placed in the advertisement
    fn start_advertising(&mut self, name: &str) -> Result<(), RadioError>;

    /// Check if any peer is connected
    fn is_connected(&self) -> bool;

    /// Active connections, in the order the stack reports them
    fn connections(&mut self) -> &mut [Self::Connection];
}
