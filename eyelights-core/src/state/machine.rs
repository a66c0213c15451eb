//! Phase definition
//!
//! All rendering is a function of the current phase and the remaining time.

use super::events::Event;

/// Countdown phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No time source yet; waiting for the radio or the button
    #[default]
    WaitingForTrigger,
    /// End time known, counting down
    Counting,
    /// Countdown over; idle display forever
    Done,
}

impl Phase {
    /// Check if the countdown has an end time
    pub fn is_started(&self) -> bool {
        !matches!(self, Phase::WaitingForTrigger)
    }

    /// Check if this is the terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        match (self, event) {
            (Phase::WaitingForTrigger, Event::Triggered) => Phase::Counting,
            (Phase::Counting, Event::Expired) => Phase::Done,
            // Done is terminal; anything else is ignored
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_flow() {
        let phase = Phase::default();
        assert_eq!(phase, Phase::WaitingForTrigger);
        assert!(!phase.is_started());

        let counting = phase.transition(Event::Triggered);
        assert_eq!(counting, Phase::Counting);
        assert!(counting.is_started());

        let done = counting.transition(Event::Expired);
        assert_eq!(done, Phase::Done);
        assert!(done.is_terminal());
    }

    #[test]
    fn test_expiry_before_trigger_is_ignored() {
        let phase = Phase::WaitingForTrigger.transition(Event::Expired);
        assert_eq!(phase, Phase::WaitingForTrigger);
    }

    #[test]
    fn test_retrigger_while_counting_is_ignored() {
        let phase = Phase::Counting.transition(Event::Triggered);
        assert_eq!(phase, Phase::Counting);
    }

    #[test]
    fn test_done_is_terminal() {
        for event in [Event::Triggered, Event::Expired] {
            assert_eq!(Phase::Done.transition(event), Phase::Done);
        }
    }
}
