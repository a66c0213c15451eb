//! Board-agnostic core logic for the EyeLights countdown glasses
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Glyph table and digit decomposition
//! - Gamma correction for ring colors
//! - Digit renderer for the 18x5 matrix and the ring progress arc
//! - Calendar conversion for the time service and the countdown target
//! - Time-sync negotiator (wireless sync or manual button start)
//! - Countdown state machine
//! - Controller that owns the collaborators and drives the frame loop
//! - Compile-time configuration

// Tests run on the host with std so proptest can be used.
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This must go first so the logging macros are visible to later modules.
mod fmt;

pub mod calendar;
pub mod config;
pub mod controller;
pub mod error;
pub mod gamma;
pub mod glyph;
pub mod render;
pub mod state;
pub mod sync;
pub mod traits;

#[cfg(test)]
mod mock;

pub use controller::Controller;
pub use error::{Error, Result};
