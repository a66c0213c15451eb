//! Digit glyphs
//!
//! Each decimal digit is a 5-row by 3-column bitmap, small enough that six
//! of them fit across the 18-column matrix.

/// Glyph height in pixels
pub const GLYPH_HEIGHT: usize = 5;

/// Glyph width in pixels
pub const GLYPH_WIDTH: usize = 3;

/// A 5x3 bitmap of on/off flags, indexed `[row][column]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(pub [[u8; GLYPH_WIDTH]; GLYPH_HEIGHT]);

impl Glyph {
    /// Flag at `row`, `col` (0 or 1)
    pub const fn bit(&self, row: usize, col: usize) -> u8 {
        self.0[row][col]
    }

    /// Iterate over `(row, col, bit)` for every cell
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, bits)| {
            bits.iter().enumerate().map(move |(col, &bit)| (row, col, bit))
        })
    }
}

#[rustfmt::skip]
pub const ZERO: Glyph = Glyph([
    [1, 1, 1],
    [1, 0, 1],
    [1, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
]);

#[rustfmt::skip]
pub const ONE: Glyph = Glyph([
    [0, 0, 1],
    [0, 0, 1],
    [0, 0, 1],
    [0, 0, 1],
    [0, 0, 1],
]);

#[rustfmt::skip]
pub const TWO: Glyph = Glyph([
    [1, 1, 1],
    [0, 0, 1],
    [1, 1, 1],
    [1, 0, 0],
    [1, 1, 1],
]);

#[rustfmt::skip]
pub const THREE: Glyph = Glyph([
    [1, 1, 1],
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 1],
    [1, 1, 1],
]);

#[rustfmt::skip]
pub const FOUR: Glyph = Glyph([
    [1, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 0, 1],
    [0, 0, 1],
]);

#[rustfmt::skip]
pub const FIVE: Glyph = Glyph([
    [1, 1, 1],
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 1],
    [1, 1, 1],
]);

#[rustfmt::skip]
pub const SIX: Glyph = Glyph([
    [1, 1, 1],
    [1, 0, 0],
    [1, 1, 1],
    [1, 0, 1],
    [1, 1, 1],
]);

#[rustfmt::skip]
pub const SEVEN: Glyph = Glyph([
    [1, 1, 1],
    [0, 0, 1],
    [0, 0, 1],
    [0, 0, 1],
    [0, 0, 1],
]);

#[rustfmt::skip]
pub const EIGHT: Glyph = Glyph([
    [1, 1, 1],
    [1, 0, 1],
    [1, 1, 1],
    [1, 0, 1],
    [1, 1, 1],
]);

#[rustfmt::skip]
pub const NINE: Glyph = Glyph([
    [1, 1, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 0, 1],
    [1, 1, 1],
]);

/// Glyphs for 0-9, indexed by digit
pub const DIGITS: [Glyph; 10] = [ZERO, ONE, TWO, THREE, FOUR, FIVE, SIX, SEVEN, EIGHT, NINE];

/// Look up the glyph for a digit
///
/// Anything above 9 shows as zero.
pub fn glyph_for(digit: u32) -> &'static Glyph {
    usize::try_from(digit)
        .ok()
        .and_then(|i| DIGITS.get(i))
        .unwrap_or(&ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_digits_map_to_their_glyphs() {
        assert_eq!(glyph_for(0), &ZERO);
        assert_eq!(glyph_for(1), &ONE);
        assert_eq!(glyph_for(7), &SEVEN);
        assert_eq!(glyph_for(9), &NINE);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        for (i, a) in DIGITS.iter().enumerate() {
            for b in &DIGITS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_cells_cover_the_grid() {
        let cells: usize = EIGHT.cells().count();
        assert_eq!(cells, GLYPH_HEIGHT * GLYPH_WIDTH);
        let lit = EIGHT.cells().filter(|&(_, _, bit)| bit == 1).count();
        assert_eq!(lit, 13);
        assert_eq!(ONE.bit(2, 2), 1);
        assert_eq!(ONE.bit(2, 0), 0);
    }

    proptest! {
        #[test]
        fn test_overflow_falls_back_to_zero(n in 10u32..) {
            prop_assert_eq!(glyph_for(n), &ZERO);
        }
    }
}
