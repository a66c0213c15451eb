//! In-memory frame buffer
//!
//! A `LedSurface` that keeps a pending frame and the last committed one.
//! Host tests render into it and inspect what would have been on the
//! glasses after each `show()`.

use crate::backend::{LedSurface, PackedColor, Ring, SurfaceError};

/// Matrix width in pixels
pub const MATRIX_WIDTH: usize = 18;

/// Matrix height in pixels
pub const MATRIX_HEIGHT: usize = 5;

/// LEDs per ring
pub const RING_LEN: usize = 24;

/// One complete picture on the glasses
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Matrix intensities, indexed `[row][column]`
    pub matrix: [[u8; MATRIX_WIDTH]; MATRIX_HEIGHT],
    /// Ring colors, indexed `[ring][position]`
    pub rings: [[PackedColor; RING_LEN]; 2],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Create a dark frame
    pub const fn new() -> Self {
        Self {
            matrix: [[0; MATRIX_WIDTH]; MATRIX_HEIGHT],
            rings: [[PackedColor::OFF; RING_LEN]; 2],
        }
    }

    /// Get a matrix pixel, or None if out of range
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        self.matrix.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a ring LED, or None if out of range
    pub fn ring_pixel(&self, ring: Ring, index: usize) -> Option<PackedColor> {
        self.rings[ring.index()].get(index).copied()
    }

    /// Positions of the lit LEDs on a ring, in order
    pub fn lit_ring_positions(&self, ring: Ring) -> impl Iterator<Item = usize> + '_ {
        self.rings[ring.index()]
            .iter()
            .enumerate()
            .filter(|(_, color)| color.is_lit())
            .map(|(i, _)| i)
    }

    /// Number of lit LEDs on a ring
    pub fn lit_ring_count(&self, ring: Ring) -> usize {
        self.lit_ring_positions(ring).count()
    }

    /// Extract a 5x3 block of the matrix starting at column `x`
    ///
    /// Each cell is true when the pixel is lit. Columns past the right
    /// edge read as unlit.
    pub fn block(&self, x: usize) -> [[bool; 3]; MATRIX_HEIGHT] {
        let mut block = [[false; 3]; MATRIX_HEIGHT];
        for (y, out_row) in block.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = self.pixel(x + col, y).unwrap_or(0) != 0;
            }
        }
        block
    }
}

/// Buffered in-memory LED surface
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    /// Frame being written
    pending: Frame,
    /// Frame most recently committed with `show()`
    committed: Frame,
    /// Number of `show()` calls so far
    show_count: u32,
    /// Last global current set
    global_current: u8,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a dark frame buffer
    pub const fn new() -> Self {
        Self {
            pending: Frame::new(),
            committed: Frame::new(),
            show_count: 0,
            global_current: 0,
        }
    }

    /// Frame currently being written (not yet shown)
    pub fn pending(&self) -> &Frame {
        &self.pending
    }

    /// Frame committed by the last `show()`
    pub fn committed(&self) -> &Frame {
        &self.committed
    }

    /// Number of `show()` calls so far
    pub fn show_count(&self) -> u32 {
        self.show_count
    }

    /// Last global current set
    pub fn global_current(&self) -> u8 {
        self.global_current
    }
}

impl LedSurface for FrameBuffer {
    fn pixel(&mut self, x: u8, y: u8, intensity: u8) -> Result<(), SurfaceError> {
        let cell = self
            .pending
            .matrix
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
            .ok_or(SurfaceError::InvalidCoordinates)?;
        *cell = intensity;
        Ok(())
    }

    fn fill_ring(&mut self, ring: Ring, color: PackedColor) -> Result<(), SurfaceError> {
        self.pending.rings[ring.index()] = [color; RING_LEN];
        Ok(())
    }

    fn set_ring_pixel(
        &mut self,
        ring: Ring,
        index: usize,
        color: PackedColor,
    ) -> Result<(), SurfaceError> {
        let led = self.pending.rings[ring.index()]
            .get_mut(index)
            .ok_or(SurfaceError::InvalidCoordinates)?;
        *led = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), SurfaceError> {
        self.committed = self.pending.clone();
        self.show_count = self.show_count.saturating_add(1);
        Ok(())
    }

    fn set_global_current(&mut self, level: u8) -> Result<(), SurfaceError> {
        self.global_current = level;
        Ok(())
    }

    fn ring_len(&self) -> usize {
        RING_LEN
    }
}
