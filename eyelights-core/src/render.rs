//! Digit renderer
//!
//! Places glyphs on the matrix and draws the progress arc on a ring.
//! Nothing here calls `show()`; the controller commits once per frame.
//!
//! Matrix layout, columns 0-17:
//!
//! ```text
//!  0 | 1 2 3 | 4 5 6 | 7 8 9 10 | 11 12 13 | 14 15 16 | 17
//!    | left  digits  |          | right digits        |
//! ```

use eyelights_display::{LedSurface, PackedColor, Ring, SurfaceError};

use crate::config::DisplayConfig;
use crate::gamma;
use crate::glyph::{glyph_for, Glyph};

/// First column of the left digit group
pub const LEFT_OFFSET: u8 = 1;

/// First column of the right digit group
pub const RIGHT_OFFSET: u8 = 11;

/// Column advance between consecutive glyphs
pub const GLYPH_ADVANCE: u8 = 3;

/// Split a value into its tens and ones digits
///
/// Only the last two decimal places are kept; callers reduce the value
/// first (the short countdown passes `remaining % 60`).
pub const fn digits(n: u32) -> [u8; 2] {
    [(n / 10 % 10) as u8, (n % 10) as u8]
}

/// Split a value into six digits, most significant (10^5) first
pub const fn digits_full(n: u32) -> [u8; 6] {
    [
        (n / 100_000 % 10) as u8,
        (n / 10_000 % 10) as u8,
        (n / 1_000 % 10) as u8,
        (n / 100 % 10) as u8,
        (n / 10 % 10) as u8,
        (n % 10) as u8,
    ]
}

/// Renders digits and ring state onto an [`LedSurface`]
#[derive(Debug, Clone)]
pub struct DigitRenderer {
    intensity: u8,
    ring_color: PackedColor,
    ring_start: usize,
    progress_ring: Ring,
}

impl DigitRenderer {
    /// Create a renderer, gamma-correcting the ring color once
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            intensity: config.pixel_intensity,
            ring_color: gamma::correct(config.idle_color, config.gamma),
            ring_start: config.ring_start,
            progress_ring: config.progress_ring,
        }
    }

    /// Gamma-corrected ring color
    pub fn ring_color(&self) -> PackedColor {
        self.ring_color
    }

    /// Draw one glyph with its left edge at column `x_offset`
    ///
    /// Every cell is written, so a previous glyph at the same place is
    /// fully replaced.
    pub fn display<S: LedSurface>(
        &self,
        surface: &mut S,
        glyph: &Glyph,
        x_offset: u8,
    ) -> Result<(), SurfaceError> {
        for (row, col, bit) in glyph.cells() {
            surface.pixel(
                x_offset.saturating_add(col as u8),
                row as u8,
                bit.saturating_mul(self.intensity),
            )?;
        }
        Ok(())
    }

    /// Draw a digit sequence starting at `offset`, one glyph every 3 columns
    fn display_sequence<S: LedSurface>(
        &self,
        surface: &mut S,
        digits: &[u8],
        offset: u8,
    ) -> Result<(), SurfaceError> {
        let mut x = offset;
        for &d in digits {
            self.display(surface, glyph_for(u32::from(d)), x)?;
            x = x.saturating_add(GLYPH_ADVANCE);
        }
        Ok(())
    }

    /// Draw digits in the left group
    pub fn display_left<S: LedSurface>(
        &self,
        surface: &mut S,
        digits: &[u8],
    ) -> Result<(), SurfaceError> {
        self.display_sequence(surface, digits, LEFT_OFFSET)
    }

    /// Draw digits in the right group
    pub fn display_right<S: LedSurface>(
        &self,
        surface: &mut S,
        digits: &[u8],
    ) -> Result<(), SurfaceError> {
        self.display_sequence(surface, digits, RIGHT_OFFSET)
    }

    /// Show a two-digit value on both sides of the matrix
    pub fn display_digits<S: LedSurface>(
        &self,
        surface: &mut S,
        value: u32,
    ) -> Result<(), SurfaceError> {
        let ds = digits(value);
        self.display_left(surface, &ds)?;
        self.display_right(surface, &ds)
    }

    /// Show a six-digit value: ring arc, then left pair, then right pair
    ///
    /// The top two digits are the ring value (0-59 in practice), drawn as
    /// an arc on the progress ring. The middle pair goes to the left group
    /// and the bottom pair to the right group.
    pub fn display_digits_full<S: LedSurface>(
        &self,
        surface: &mut S,
        value: u32,
    ) -> Result<(), SurfaceError> {
        let ds = digits_full(value);
        let ring_value = i32::from(ds[0]) * 10 + i32::from(ds[1]);
        self.display_ring_progress(surface, ring_value)?;
        self.display_left(surface, &ds[2..4])?;
        self.display_right(surface, &ds[4..6])
    }

    /// Clear the progress ring and light `value` positions from the start index
    ///
    /// Zero or negative values leave the ring dark. Positions past the end
    /// of the ring are dropped rather than wrapped.
    pub fn display_ring_progress<S: LedSurface>(
        &self,
        surface: &mut S,
        value: i32,
    ) -> Result<(), SurfaceError> {
        surface.fill_ring(self.progress_ring, PackedColor::OFF)?;
        if value <= 0 {
            return Ok(());
        }

        let end = self
            .ring_start
            .saturating_add(value as usize)
            .min(surface.ring_len());
        for i in self.ring_start..end {
            surface.set_ring_pixel(self.progress_ring, i, self.ring_color)?;
        }
        Ok(())
    }

    /// Draw the idle display: both rings lit, fixed values left and right
    pub fn display_idle<S: LedSurface>(
        &self,
        surface: &mut S,
        left: u32,
        right: u32,
    ) -> Result<(), SurfaceError> {
        for ring in Ring::ALL {
            surface.fill_ring(ring, self.ring_color)?;
        }
        self.display_left(surface, &digits(left))?;
        self.display_right(surface, &digits(right))
    }
}
