//! Gamma correction
//!
//! LEDs respond linearly to PWM duty but the eye does not. Ring colors are
//! run through a power curve once, up front, and the packed result is what
//! the renderer writes.

use eyelights_display::PackedColor;
use smart_leds::RGB8;

/// Gamma exponent used for the rings
pub const DEFAULT_GAMMA: f32 = 2.6;

/// Correct one 8-bit channel
fn correct_channel(c: u8, gamma: f32) -> u8 {
    let linear = f32::from(c) / 255.0;
    // Round half up; the result is within 0.5..=255.5 so the cast cannot wrap.
    libm::floorf(libm::powf(linear, gamma) * 255.0 + 0.5) as u8
}

/// Apply gamma correction to a color and pack it as `0xRRGGBB`
pub fn correct(color: RGB8, gamma: f32) -> PackedColor {
    PackedColor::from_rgb(
        correct_channel(color.r, gamma),
        correct_channel(color.g, gamma),
        correct_channel(color.b, gamma),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_and_white_are_fixed_points() {
        assert_eq!(correct(RGB8::new(0, 0, 0), DEFAULT_GAMMA), PackedColor(0x000000));
        assert_eq!(
            correct(RGB8::new(255, 255, 255), DEFAULT_GAMMA),
            PackedColor(0xFFFFFF)
        );
    }

    #[test]
    fn test_idle_gray() {
        // (75 / 255) ^ 2.6 * 255 = 10.58
        assert_eq!(correct(RGB8::new(75, 75, 75), DEFAULT_GAMMA), PackedColor(0x0B0B0B));
    }

    #[test]
    fn test_channels_are_packed_in_order() {
        let packed = correct(RGB8::new(255, 0, 0), DEFAULT_GAMMA);
        assert_eq!(packed, PackedColor(0xFF0000));
        let packed = correct(RGB8::new(0, 0, 255), DEFAULT_GAMMA);
        assert_eq!(packed, PackedColor(0x0000FF));
    }

    #[test]
    fn test_deterministic() {
        let color = RGB8::new(75, 75, 75);
        assert_eq!(correct(color, DEFAULT_GAMMA), correct(color, DEFAULT_GAMMA));
    }

    #[test]
    fn test_linear_gamma_is_identity() {
        for c in [0u8, 1, 17, 128, 254, 255] {
            assert_eq!(correct_channel(c, 1.0), c);
        }
    }

    #[test]
    fn test_curve_is_monotonic() {
        let mut last = 0;
        for c in 0..=255u8 {
            let out = correct_channel(c, DEFAULT_GAMMA);
            assert!(out >= last);
            last = out;
        }
    }
}
