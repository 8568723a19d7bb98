//! In-memory mirror of the controller's display RAM
//!
//! The SSD1306 stores pixels in pages: each page is a strip of 8 rows, and
//! one byte covers one pixel column of that strip. Bit `n` of the byte at
//! `[col][page]` is pixel row `8 * page + n`.
//!
//! ```text
//!            col 0    col 1         col 127
//! page 0   [ b0..b7 ][ b0..b7 ] ... [ b0..b7 ]   rows 0-7
//! page 1   [ b0..b7 ][ b0..b7 ] ... [ b0..b7 ]   rows 8-15
//!   ...
//! page 7   [ b0..b7 ][ b0..b7 ] ... [ b0..b7 ]   rows 56-63
//! ```
//!
//! ## Example
//!
//! ```
//! use oled128x64::framebuffer::locate;
//!
//! // Row 13 lives in page 1, bit 5
//! assert_eq!(locate(13), (1, 0x20));
//! ```

use crate::config::{HEIGHT, PAGES, WIDTH};

/// Map a pixel row to its page index and bit mask
///
/// # Returns
///
/// Returns a tuple of (page, bit_mask):
/// - `page`: `row / 8`
/// - `bit_mask`: `1 << (row % 8)`
pub fn locate(row: usize) -> (usize, u8) {
    (row / 8, 1 << (row % 8))
}

/// Cached copy of the panel contents, addressed `[column][page]`
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    cells: [[u8; PAGES]; WIDTH],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create an all-dark buffer
    pub const fn new() -> Self {
        Self {
            cells: [[0; PAGES]; WIDTH],
        }
    }

    /// Byte at a pixel column and page, or `None` outside the panel
    pub fn get(&self, col: usize, page: usize) -> Option<u8> {
        self.cells.get(col)?.get(page).copied()
    }

    /// Whether the pixel at (row, col) is lit in the cache
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let (page, mask) = locate(row);
        self.get(col, page).is_some_and(|byte| byte & mask != 0)
    }

    /// Iterate over the 128 bytes of one page, left to right
    pub fn page(&self, page: usize) -> impl Iterator<Item = u8> + '_ {
        self.cells
            .iter()
            .map(move |column| column.get(page).copied().unwrap_or(0))
    }

    /// Whether every byte is zero
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|byte| *byte == 0)
    }

    pub(crate) fn set(&mut self, col: usize, page: usize, byte: u8) {
        if let Some(cell) = self.cells.get_mut(col).and_then(|c| c.get_mut(page)) {
            *cell = byte;
        }
    }

    /// OR the pixel's bit into its byte and return the updated byte
    pub(crate) fn set_bit(&mut self, row: usize, col: usize) -> u8 {
        let (page, mask) = locate(row);
        match self.cells.get_mut(col).and_then(|c| c.get_mut(page)) {
            Some(cell) => {
                *cell |= mask;
                *cell
            }
            None => 0,
        }
    }

    #[cfg(any(feature = "graphics", test))]
    pub(crate) fn clear_bit(&mut self, row: usize, col: usize) {
        let (page, mask) = locate(row);
        if let Some(cell) = self.cells.get_mut(col).and_then(|c| c.get_mut(page)) {
            *cell &= !mask;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [[0; PAGES]; WIDTH];
    }

    /// Zero one 8x8 character cell
    pub(crate) fn clear_cell(&mut self, page: usize, char_col: usize) {
        for col in char_col * 8..char_col * 8 + 8 {
            self.set(col, page, 0);
        }
    }
}

/// Model of the controller's RAM write pointer
///
/// With horizontal addressing each data byte lands at the pointer, which then
/// moves one column right; past column 127 it wraps to column 0 of the next
/// page, and past page 7 back to page 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RamPointer {
    /// Current page
    pub page: usize,
    /// Current pixel column
    pub col: usize,
}

impl RamPointer {
    /// Pointer at the given page and pixel column
    pub fn new(page: usize, col: usize) -> Self {
        Self { page, col }
    }

    /// Step past the byte just written
    pub fn advance(&mut self) {
        self.col += 1;
        if self.col >= WIDTH {
            self.col = 0;
            self.page = (self.page + 1) % PAGES;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate() {
        assert_eq!(locate(0), (0, 0x01));
        assert_eq!(locate(7), (0, 0x80));
        assert_eq!(locate(8), (1, 0x01));
        assert_eq!(locate(63), (7, 0x80));
    }

    #[test]
    fn test_set_bit_preserves_other_bits() {
        let mut fb = FrameBuffer::new();
        fb.set(10, 2, 0b0000_0101);
        let byte = fb.set_bit(2 * 8 + 4, 10);
        assert_eq!(byte, 0b0001_0101);
        assert_eq!(fb.get(10, 2), Some(0b0001_0101));
    }

    #[test]
    fn test_clear_bit() {
        let mut fb = FrameBuffer::new();
        fb.set(0, 0, 0xFF);
        fb.clear_bit(3, 0);
        assert_eq!(fb.get(0, 0), Some(0xF7));
        assert!(!fb.pixel(3, 0));
        assert!(fb.pixel(4, 0));
    }

    #[test]
    fn test_clear_cell_only_touches_its_cell() {
        let mut fb = FrameBuffer::new();
        for col in 0..WIDTH {
            fb.set(col, 3, 0xFF);
        }
        fb.clear_cell(3, 2);
        assert_eq!(fb.get(15, 3), Some(0xFF));
        assert!((16..24).all(|col| fb.get(col, 3) == Some(0)));
        assert_eq!(fb.get(24, 3), Some(0xFF));
    }

    #[test]
    fn test_page_iterates_columns_left_to_right() {
        let mut fb = FrameBuffer::new();
        fb.set(0, 2, 0x11);
        fb.set(127, 2, 0x22);
        fb.set(0, 3, 0x33);
        let page: alloc::vec::Vec<u8> = fb.page(2).collect();
        assert_eq!(page.len(), WIDTH);
        assert_eq!(page[0], 0x11);
        assert_eq!(page[127], 0x22);
        assert!(page[1..127].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_out_of_range_access_is_ignored() {
        let mut fb = FrameBuffer::new();
        fb.set(WIDTH, 0, 0xFF);
        fb.set(0, PAGES, 0xFF);
        assert!(fb.is_blank());
        assert_eq!(fb.get(WIDTH, 0), None);
        assert!(!fb.pixel(HEIGHT, 0));
    }

    #[test]
    fn test_ram_pointer_wraps_to_next_page() {
        let mut ptr = RamPointer::new(0, 127);
        ptr.advance();
        assert_eq!(ptr, RamPointer::new(1, 0));

        let mut ptr = RamPointer::new(7, 127);
        ptr.advance();
        assert_eq!(ptr, RamPointer::new(0, 0));
    }
}
