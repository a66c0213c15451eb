//! LED surface abstraction for the EyeLights glasses
//!
//! This crate provides:
//! - `LedSurface` trait for anything that can show the glasses' matrix and rings
//! - `Ring` and `PackedColor` types shared by renderers and drivers
//! - `FrameBuffer`, an in-memory surface that records committed frames
//!
//! # Architecture
//!
//! The glasses carry an 18x5 single-color-intensity matrix across the
//! front and one 24-LED RGB ring around each lens. A board driver (for
//! example an IS31FL3741 over I2C) implements `LedSurface` and buffers
//! writes until `show()`. The countdown logic only ever talks to the
//! trait, so it runs unchanged against `FrameBuffer` on the host.

#![no_std]

pub mod backend;
pub mod frame;

// Re-export key types
pub use backend::{LedSurface, PackedColor, Ring, SurfaceError};
pub use frame::{Frame, FrameBuffer, MATRIX_HEIGHT, MATRIX_WIDTH, RING_LEN};
