//! EyeLights Hardware Abstraction Layer
//!
//! This crate defines the traits the countdown logic uses to reach the
//! hardware that is not the LED surface itself. Board support crates
//! implement them; host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (eyelights-core)           │
//! └─────────────────────────────────────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌─────────────────┐     ┌─────────────────────┐
//! │ eyelights-hal   │     │ eyelights-display   │
//! │ (this crate)    │     │ (LED surface trait) │
//! └─────────────────┘     └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────────────────┐
//! │  Board support (eyelights-drivers, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (the button)
//! - [`clock::WallClock`] - Wall-clock seconds since the Unix epoch
//! - [`radio::Radio`], [`radio::TimeConnection`] - Wireless link with a
//!   current-time service

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod radio;

// Re-export key traits at crate root for convenience
pub use clock::{UnixSeconds, WallClock};
pub use gpio::InputPin;
pub use radio::{CurrentTime, Radio, RadioError, TimeConnection};
