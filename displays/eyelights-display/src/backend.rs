//! LED surface trait
//!
//! Defines the interface to the glasses' LED driver.

/// LED surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Communication error with the LED driver
    Communication,
    /// Pixel or ring index outside the surface
    InvalidCoordinates,
    /// Driver not initialized
    NotInitialized,
}

/// One of the two LED rings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ring {
    Left,
    Right,
}

impl Ring {
    /// Both rings, left first
    pub const ALL: [Ring; 2] = [Ring::Left, Ring::Right];

    /// Index of the ring in per-ring arrays
    pub const fn index(self) -> usize {
        match self {
            Ring::Left => 0,
            Ring::Right => 1,
        }
    }
}

/// 24-bit RGB color packed as `0xRRGGBB`
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// All channels off
    pub const OFF: PackedColor = PackedColor(0);

    /// Pack three 8-bit channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        PackedColor(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Check if any channel is lit
    pub const fn is_lit(self) -> bool {
        self.0 & 0x00FF_FFFF != 0
    }
}

/// LED surface trait
///
/// Writes are buffered; nothing reaches the LEDs until [`show`](Self::show).
pub trait LedSurface {
    /// Set one matrix pixel
    ///
    /// - `x`: Column (0-based, left to right)
    /// - `y`: Row (0-based, top to bottom)
    /// - `intensity`: Driver-native brightness, 0 = off
    fn pixel(&mut self, x: u8, y: u8, intensity: u8) -> Result<(), SurfaceError>;

    /// Set every LED of a ring to one color
    fn fill_ring(&mut self, ring: Ring, color: PackedColor) -> Result<(), SurfaceError>;

    /// Set one LED of a ring
    ///
    /// - `index`: Position on the ring (0-based)
    fn set_ring_pixel(
        &mut self,
        ring: Ring,
        index: usize,
        color: PackedColor,
    ) -> Result<(), SurfaceError>;

    /// Commit buffered writes to the LEDs
    fn show(&mut self) -> Result<(), SurfaceError>;

    /// Set the driver's global current (overall brightness)
    fn set_global_current(&mut self, level: u8) -> Result<(), SurfaceError>;

    /// Number of LEDs on each ring
    fn ring_len(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rgb() {
        assert_eq!(PackedColor::from_rgb(0x12, 0x34, 0x56), PackedColor(0x123456));
        assert_eq!(PackedColor::from_rgb(0, 0, 0), PackedColor::OFF);
        assert!(!PackedColor::OFF.is_lit());
        assert!(PackedColor::from_rgb(0, 0, 1).is_lit());
    }

    #[test]
    fn test_ring_index() {
        assert_eq!(Ring::Left.index(), 0);
        assert_eq!(Ring::Right.index(), 1);
        assert_eq!(Ring::ALL, [Ring::Left, Ring::Right]);
    }
}
