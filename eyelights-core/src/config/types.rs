//! Configuration type definitions

use eyelights_display::Ring;
use eyelights_hal::UnixSeconds;
use smart_leds::RGB8;

use crate::calendar::NEW_YEAR_2022;
use crate::gamma::DEFAULT_GAMMA;

/// Default driver global current ("just middling bright")
pub const DEFAULT_GLOBAL_CURRENT: u8 = 20;

/// Default matrix intensity for a lit glyph pixel
pub const DEFAULT_PIXEL_INTENSITY: u8 = 100;

/// Default ring color before gamma correction
pub const DEFAULT_IDLE_COLOR: RGB8 = RGB8 { r: 75, g: 75, b: 75 };

/// Ring position where the progress arc starts
pub const DEFAULT_RING_START: usize = 6;

/// Name placed in the time-service solicitation
pub const DEFAULT_ADVERTISED_NAME: &str = "TimePlease";

/// Display configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Driver global current, applied once at startup
    pub global_current: u8,
    /// Intensity written for a lit glyph pixel
    pub pixel_intensity: u8,
    /// Gamma exponent for ring colors
    pub gamma: f32,
    /// Ring color (before gamma) for the idle display and progress arc
    pub idle_color: RGB8,
    /// First ring position lit by the progress arc
    pub ring_start: usize,
    /// Ring used for the progress arc
    pub progress_ring: Ring,
    /// Two-digit value shown on the left once the countdown is over
    pub idle_left: u32,
    /// Two-digit value shown on the right once the countdown is over
    pub idle_right: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            global_current: DEFAULT_GLOBAL_CURRENT,
            pixel_intensity: DEFAULT_PIXEL_INTENSITY,
            gamma: DEFAULT_GAMMA,
            idle_color: DEFAULT_IDLE_COLOR,
            ring_start: DEFAULT_RING_START,
            progress_ring: Ring::Left,
            idle_left: 20,
            idle_right: 22,
        }
    }
}

/// Time-sync negotiation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Complete local name advertised while waiting for a peer
    pub advertised_name: &'static str,
    /// Sleep between unsuccessful polls (ms)
    pub poll_interval_ms: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            advertised_name: DEFAULT_ADVERTISED_NAME,
            poll_interval_ms: 50,
        }
    }
}

/// Countdown configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownConfig {
    /// Moment the synchronized countdown ends
    pub target: UnixSeconds,
    /// Length of the button-started countdown (s)
    pub manual_seconds: i64,
    /// Sleep between rendered frames (ms)
    pub frame_interval_ms: u32,
    /// Remaining time below which the two-digit mode is used (s)
    pub short_threshold_s: i64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: NEW_YEAR_2022,
            manual_seconds: 10,
            frame_interval_ms: 200,
            short_threshold_s: 60,
        }
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub display: DisplayConfig,
    pub sync: SyncConfig,
    pub countdown: CountdownConfig,
}
