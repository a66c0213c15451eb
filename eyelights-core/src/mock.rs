//! Mock collaborators for host tests

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use eyelights_hal::{CurrentTime, Radio, RadioError, TimeConnection, UnixSeconds, WallClock};
use heapless::{String, Vec};

use crate::traits::Button;

/// Shared fake time; the clock reads it and the delay advances it
pub struct FakeTime {
    origin: i64,
    elapsed_ns: Cell<u64>,
}

impl FakeTime {
    pub fn new(origin: i64) -> Self {
        Self {
            origin,
            elapsed_ns: Cell::new(0),
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.elapsed_ns.set(self.elapsed_ns.get() + ms * 1_000_000);
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns.get() / 1_000_000
    }
}

pub struct FakeClock<'a>(pub &'a FakeTime);

impl WallClock for FakeClock<'_> {
    fn now(&self) -> UnixSeconds {
        UnixSeconds(self.0.origin + (self.0.elapsed_ns.get() / 1_000_000_000) as i64)
    }
}

pub struct FakeDelay<'a>(pub &'a FakeTime);

impl DelayNs for FakeDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        let t = self.0;
        t.elapsed_ns.set(t.elapsed_ns.get() + u64::from(ns));
    }
}

pub struct MockButton {
    pressed: Cell<bool>,
}

impl MockButton {
    pub fn new() -> Self {
        Self {
            pressed: Cell::new(false),
        }
    }

    pub fn press(&self) {
        self.pressed.set(true);
    }
}

impl Button for MockButton {
    fn is_pressed(&self) -> bool {
        self.pressed.get()
    }
}

pub struct MockConnection {
    pub paired: bool,
    /// Pairing completes on this `pair()` call
    pub pair_after: u8,
    pub pair_calls: u8,
    pub time: Result<CurrentTime, RadioError>,
    pub reads: u8,
    pub disconnected: bool,
}

impl MockConnection {
    pub fn new(time: Result<CurrentTime, RadioError>) -> Self {
        Self {
            paired: false,
            pair_after: 1,
            pair_calls: 0,
            time,
            reads: 0,
            disconnected: false,
        }
    }
}

impl TimeConnection for MockConnection {
    fn is_paired(&self) -> bool {
        self.paired
    }

    fn pair(&mut self) -> Result<(), RadioError> {
        self.pair_calls += 1;
        if self.pair_calls >= self.pair_after {
            self.paired = true;
        }
        Ok(())
    }

    fn current_time(&mut self) -> Result<CurrentTime, RadioError> {
        self.reads += 1;
        self.time
    }

    fn disconnect(&mut self) -> Result<(), RadioError> {
        self.disconnected = true;
        Ok(())
    }
}

pub struct MockRadio {
    pub connected: bool,
    pub connections: Vec<MockConnection, 4>,
    pub advertised: Option<String<32>>,
    pub advertise_calls: u8,
}

impl MockRadio {
    pub fn new() -> Self {
        Self {
            connected: false,
            connections: Vec::new(),
            advertised: None,
            advertise_calls: 0,
        }
    }

    pub fn with_connection(connection: MockConnection) -> Self {
        let mut radio = Self::new();
        radio.connect(connection);
        radio
    }

    pub fn connect(&mut self, connection: MockConnection) {
        assert!(self.connections.push(connection).is_ok());
        self.connected = true;
    }

    pub fn advertised_name(&self) -> Option<&str> {
        self.advertised.as_ref().map(|s| s.as_str())
    }
}

impl Radio for MockRadio {
    type Connection = MockConnection;

    fn start_advertising(&mut self, name: &str) -> Result<(), RadioError> {
        self.advertise_calls += 1;
        let mut advertised = String::new();
        advertised
            .push_str(name)
            .map_err(|_| RadioError::AdvertisingFailed)?;
        self.advertised = Some(advertised);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected && !self.connections.is_empty()
    }

    fn connections(&mut self) -> &mut [MockConnection] {
        &mut self.connections
    }
}
