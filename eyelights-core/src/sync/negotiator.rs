//! Time-sync negotiator
//!
//! Two ways to start, polled in order until one fires:
//!
//! 1. **Wireless**: a connected peer is paired, its current time is read
//!    once, and the difference to the local clock becomes the clock
//!    adjustment. The countdown then runs to the configured target.
//! 2. **Manual**: the button is pressed and a short countdown starts from
//!    the local clock with no adjustment.
//!
//! There is no timeout; the negotiator waits as long as it takes.

use embedded_hal::delay::DelayNs;
use eyelights_hal::{Radio, TimeConnection, UnixSeconds, WallClock};

use crate::calendar;
use crate::config::{CountdownConfig, SyncConfig};
use crate::error::Result;
use crate::state::FULL_VIEW_RANGE_S;
use crate::traits::Button;

/// What started the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerSource {
    /// Reference time read from a peer
    Synchronized,
    /// Button pressed
    Manual,
}

/// Outcome of a successful negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Trigger {
    pub source: TriggerSource,
    /// Local time when the trigger fired
    pub start_time: UnixSeconds,
    /// Reference time the countdown ends
    pub end_time: UnixSeconds,
    /// Seconds to add to local time to get reference time
    pub clock_adjustment: i64,
}

/// Time-sync negotiator
#[derive(Debug, Clone)]
pub struct Negotiator {
    advertised_name: &'static str,
    poll_interval_ms: u32,
    target: UnixSeconds,
    manual_seconds: i64,
    advertising: bool,
}

impl Negotiator {
    /// Create a negotiator
    pub fn new(sync: &SyncConfig, countdown: &CountdownConfig) -> Self {
        Self {
            advertised_name: sync.advertised_name,
            poll_interval_ms: sync.poll_interval_ms,
            target: countdown.target,
            manual_seconds: countdown.manual_seconds,
            advertising: false,
        }
    }

    /// Check if advertising has been started
    pub fn is_advertising(&self) -> bool {
        self.advertising
    }

    /// Start soliciting the current-time service, once
    pub fn begin<R: Radio>(&mut self, radio: &mut R) -> Result<()> {
        if !self.advertising {
            radio.start_advertising(self.advertised_name)?;
            self.advertising = true;
            info!("Advertising as {=str}", self.advertised_name);
        }
        Ok(())
    }

    /// Check both start paths once
    ///
    /// Returns `Ok(None)` if neither has fired yet. Radio and calendar
    /// failures are returned as errors.
    pub fn poll<R, B, C>(&mut self, radio: &mut R, button: &B, clock: &C) -> Result<Option<Trigger>>
    where
        R: Radio,
        B: Button,
        C: WallClock,
    {
        if radio.is_connected() {
            if let Some(trigger) = self.poll_connections(radio, clock)? {
                return Ok(Some(trigger));
            }
        }

        if button.is_pressed() {
            let now = clock.now();
            info!("Button pressed, {=i64} s countdown", self.manual_seconds);
            return Ok(Some(Trigger {
                source: TriggerSource::Manual,
                start_time: now,
                end_time: now + self.manual_seconds,
                clock_adjustment: 0,
            }));
        }

        Ok(None)
    }

    /// Pair with and read the first connection that is ready
    fn poll_connections<R, C>(&mut self, radio: &mut R, clock: &C) -> Result<Option<Trigger>>
    where
        R: Radio,
        C: WallClock,
    {
        for connection in radio.connections() {
            if !connection.is_paired() {
                connection.pair()?;
                if !connection.is_paired() {
                    // Pairing still in progress; look again next poll
                    trace!("Pairing in progress");
                    continue;
                }
                info!("paired");
            }

            let remote_time = connection.current_time()?;
            let remote = calendar::to_unix_seconds(&remote_time)?;
            let local = clock.now();
            let clock_adjustment = remote.seconds_since(local);
            let until_target = self.target.seconds_since(remote);

            info!(
                "Remote time {=i64}, adjustment {=i64} s, {=i64} s until target",
                remote.as_i64(),
                clock_adjustment,
                until_target
            );
            if until_target >= FULL_VIEW_RANGE_S {
                warn!(
                    "{=i64} h until target, hours shown mod 100",
                    until_target / 3600
                );
            }

            connection.disconnect()?;

            return Ok(Some(Trigger {
                source: TriggerSource::Synchronized,
                start_time: local,
                end_time: self.target,
                clock_adjustment,
            }));
        }
        Ok(None)
    }

    /// Advertise, then poll until one of the start paths fires
    ///
    /// Sleeps the configured poll interval between unsuccessful polls.
    pub fn negotiate<R, B, C, D>(
        &mut self,
        radio: &mut R,
        button: &B,
        clock: &C,
        delay: &mut D,
    ) -> Result<Trigger>
    where
        R: Radio,
        B: Button,
        C: WallClock,
        D: DelayNs,
    {
        self.begin(radio)?;
        loop {
            if let Some(trigger) = self.poll(radio, button, clock)? {
                return Ok(trigger);
            }
            delay.delay_ms(self.poll_interval_ms);
        }
    }
}
