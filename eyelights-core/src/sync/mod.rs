//! Time synchronization
//!
//! Decides when and how the countdown starts: either a peer supplies the
//! reference time over the radio, or the wearer presses the button.

pub mod negotiator;

pub use negotiator::{Negotiator, Trigger, TriggerSource};
