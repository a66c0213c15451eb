//! Hardware abstraction traits
//!
//! These traits define the interface between the countdown logic and
//! board-specific input handling. Clock, radio and LED surface traits live
//! in `eyelights-hal` and `eyelights-display`.

pub mod button;

pub use button::Button;
