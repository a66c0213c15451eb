//! Countdown state
//!
//! Tracks the start and end of the countdown, the offset between the local
//! clock and the reference clock, and decides what each frame shows.

use eyelights_hal::UnixSeconds;

use super::events::Event;
use super::machine::Phase;
use crate::sync::Trigger;

/// What a frame should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Not started; leave the display as is
    Waiting,
    /// Under a minute left: two-digit seconds on both sides
    Short(u32),
    /// A minute or more left: six-digit value (ring seconds, hours, minutes)
    ///
    /// Hours wrap at 100, so from [`FULL_VIEW_RANGE_S`] on the hours shown
    /// are too low.
    Full(u32),
    /// Countdown over
    Idle,
}

impl View {
    /// Check if two views use the same display mode
    pub fn same_mode(&self, other: &View) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// Remaining time from which the hours in [`View::Full`] wrap (s)
pub const FULL_VIEW_RANGE_S: i64 = 100 * 3600;

/// Compose the six-digit display value for a remaining time
///
/// Layout is `SS HH MM`: seconds within the minute drive the ring arc,
/// hours (mod 100) go left, minutes go right.
pub fn full_value(remaining: i64) -> u32 {
    let remaining = remaining.max(0);
    let seconds = (remaining % 60) as u32;
    let minutes = (remaining / 60 % 60) as u32;
    let hours = (remaining / 3600 % 100) as u32;
    seconds * 10_000 + hours * 100 + minutes
}

/// Countdown state
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    phase: Phase,
    start_time: UnixSeconds,
    end_time: UnixSeconds,
    /// Seconds added to the local clock to get reference time
    clock_adjustment: i64,
    /// Remaining time below which the short view is used
    short_threshold_s: i64,
}

impl Countdown {
    /// Create an unstarted countdown
    pub fn new(short_threshold_s: i64) -> Self {
        Self {
            short_threshold_s,
            ..Default::default()
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the countdown is over
    pub fn is_done(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Local time the countdown was started
    pub fn start_time(&self) -> UnixSeconds {
        self.start_time
    }

    /// Reference time the countdown ends
    pub fn end_time(&self) -> UnixSeconds {
        self.end_time
    }

    /// Offset from local to reference time (s)
    pub fn clock_adjustment(&self) -> i64 {
        self.clock_adjustment
    }

    /// Start counting toward the trigger's end time
    ///
    /// Returns false, leaving the state untouched, if already started.
    pub fn start(&mut self, trigger: &Trigger) -> bool {
        if self.phase.is_started() {
            return false;
        }
        self.start_time = trigger.start_time;
        self.end_time = trigger.end_time;
        self.clock_adjustment = trigger.clock_adjustment;
        self.phase = self.phase.transition(Event::Triggered);
        true
    }

    /// Seconds left at local time `now`
    pub fn remaining(&self, now: UnixSeconds) -> i64 {
        self.end_time
            .seconds_since(now + self.clock_adjustment)
    }

    /// Advance to local time `now` and pick the view for this frame
    pub fn update(&mut self, now: UnixSeconds) -> View {
        match self.phase {
            Phase::WaitingForTrigger => View::Waiting,
            Phase::Done => View::Idle,
            Phase::Counting => {
                let remaining = self.remaining(now);
                if remaining <= 0 {
                    self.phase = self.phase.transition(Event::Expired);
                    View::Idle
                } else if remaining < self.short_threshold_s {
                    View::Short((remaining % 60) as u32)
                } else {
                    View::Full(full_value(remaining))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::TriggerSource;

    fn manual(start: i64, seconds: i64) -> Trigger {
        Trigger {
            source: TriggerSource::Manual,
            start_time: UnixSeconds(start),
            end_time: UnixSeconds(start + seconds),
            clock_adjustment: 0,
        }
    }

    #[test]
    fn test_waiting_until_started() {
        let mut countdown = Countdown::new(60);
        assert_eq!(countdown.update(UnixSeconds(100)), View::Waiting);
        assert_eq!(countdown.phase(), Phase::WaitingForTrigger);
    }

    #[test]
    fn test_short_countdown() {
        let mut countdown = Countdown::new(60);
        assert!(countdown.start(&manual(1_000, 10)));

        assert_eq!(countdown.update(UnixSeconds(1_000)), View::Short(10));
        assert_eq!(countdown.update(UnixSeconds(1_009)), View::Short(1));
        assert_eq!(countdown.update(UnixSeconds(1_010)), View::Idle);
        assert!(countdown.is_done());
    }

    #[test]
    fn test_missed_exact_tick_still_finishes() {
        let mut countdown = Countdown::new(60);
        countdown.start(&manual(1_000, 10));
        assert_eq!(countdown.update(UnixSeconds(1_025)), View::Idle);
        assert!(countdown.is_done());
    }

    #[test]
    fn test_full_view_above_threshold() {
        let mut countdown = Countdown::new(60);
        countdown.start(&manual(0, 2 * 3600 + 3 * 60 + 4));
        assert_eq!(countdown.update(UnixSeconds(0)), View::Full(40_203));
        // 2 h 3 min 0 s left
        assert_eq!(countdown.update(UnixSeconds(4)), View::Full(203));
        // Exactly one minute left: no ring seconds, "00" hours, "01" minutes
        assert_eq!(countdown.update(UnixSeconds(2 * 3600 + 3 * 60 + 4 - 60)), View::Full(1));
        assert_eq!(countdown.update(UnixSeconds(2 * 3600 + 3 * 60 + 4 - 59)), View::Short(59));
    }

    #[test]
    fn test_clock_adjustment_shifts_remaining() {
        let mut countdown = Countdown::new(60);
        let trigger = Trigger {
            source: TriggerSource::Synchronized,
            start_time: UnixSeconds(500),
            end_time: UnixSeconds(10_000),
            clock_adjustment: 9_000,
        };
        countdown.start(&trigger);
        // Reference time is local + 9000 = 9500, so 500 s remain
        assert_eq!(countdown.remaining(UnixSeconds(500)), 500);
        assert_eq!(countdown.update(UnixSeconds(500)), View::Full(full_value(500)));
        assert_eq!(countdown.update(UnixSeconds(1_000)), View::Idle);
    }

    #[test]
    fn test_done_never_changes() {
        let mut countdown = Countdown::new(60);
        countdown.start(&manual(0, 10));
        countdown.update(UnixSeconds(10));
        assert!(countdown.is_done());

        let (start, end) = (countdown.start_time(), countdown.end_time());
        assert!(!countdown.start(&manual(5_000, 10)));
        for t in [11, 100, -50, 1_000_000] {
            assert_eq!(countdown.update(UnixSeconds(t)), View::Idle);
        }
        assert_eq!(countdown.start_time(), start);
        assert_eq!(countdown.end_time(), end);
        assert!(countdown.is_done());
    }

    #[test]
    fn test_second_trigger_ignored_while_counting() {
        let mut countdown = Countdown::new(60);
        countdown.start(&manual(0, 10));
        assert!(!countdown.start(&manual(3, 10)));
        assert_eq!(countdown.end_time(), UnixSeconds(10));
    }

    #[test]
    fn test_full_value_layout() {
        assert_eq!(full_value(60), 1);
        assert_eq!(full_value(61), 10_001);
        assert_eq!(full_value(3_600), 100);
        // 99:59:59
        assert_eq!(full_value(99 * 3600 + 59 * 60 + 59), 599_959);
        // Hours wrap at 100
        assert_eq!(full_value(FULL_VIEW_RANGE_S), 0);
        assert_eq!(full_value(FULL_VIEW_RANGE_S + 3 * 3600 + 60), 301);
        assert_eq!(full_value(-5), 0);
    }

    #[test]
    fn test_same_mode() {
        assert!(View::Short(3).same_mode(&View::Short(9)));
        assert!(!View::Short(3).same_mode(&View::Full(3)));
    }
}
