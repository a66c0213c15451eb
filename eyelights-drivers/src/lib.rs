//! Board-level implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in eyelights-core and eyelights-hal:
//!
//! - `GpioButton`: the glasses' push button on a digital input pin
//! - `EmbassyClock`: wall clock on top of the embassy time driver
//!   (feature `embassy`)

#![no_std]
#![deny(unsafe_code)]

pub mod button;
#[cfg(feature = "embassy")]
pub mod clock;

pub use button::GpioButton;
#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;
