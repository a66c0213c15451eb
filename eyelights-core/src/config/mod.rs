//! Configuration types
//!
//! Compile-time configuration. There is no runtime configuration source;
//! boards construct a [`Config`] (usually `Config::default()`) and hand it
//! to the controller.

pub mod types;

pub use types::*;
