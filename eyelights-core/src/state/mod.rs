//! Countdown state machine
//!
//! Defines the authoritative runtime behavior of the countdown.
//! The state machine is explicit, finite, and deterministic.

pub mod countdown;
pub mod events;
pub mod machine;

pub use countdown::{full_value, Countdown, View, FULL_VIEW_RANGE_S};
pub use events::Event;
pub use machine::Phase;
