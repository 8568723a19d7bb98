//! Built-in 8x8 bitmap font
//!
//! Glyphs are stored column by column: byte `n` of a glyph is pixel column
//! `n` of the character cell, and bit `b` of that byte is row `b` of the page
//! (LSB at the top). This matches the controller's page layout, so a glyph is
//! streamed to the panel as-is.
//!
//! The table is indexed by byte value. Control codes (except line feed) and
//! bytes above 0x7E render as a placeholder bar.

/// A 256-entry table of 8-byte column-oriented glyphs
pub type Font = [[u8; 8]; 256];

/// Default font ("Quadrang")
pub static DEFAULT_FONT: Font = [
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x1E, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x06, 0x06, 0x06, 0x00, 0x00, 0x00],
    [0x00, 0x0C, 0x1E, 0x1E, 0x1E, 0x0C, 0x00, 0x00],
    [0x00, 0x16, 0x16, 0x16, 0x16, 0x1E, 0x1E, 0x00],
    [0x06, 0x16, 0x16, 0x0E, 0x1C, 0x1E, 0x1E, 0x1C],
    [0x00, 0x1A, 0x1E, 0x1E, 0x1E, 0x16, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x06, 0x06, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3C, 0x3E, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x3C, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x04, 0x06, 0x06, 0x04, 0x00, 0x00],
    [0x00, 0x08, 0x08, 0x1C, 0x1C, 0x08, 0x00, 0x00],
    [0x30, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00],
    [0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x10, 0x1C, 0x06, 0x00, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x12, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1E, 0x1E, 0x00, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x16, 0x16, 0x16, 0x00, 0x00],
    [0x00, 0x12, 0x16, 0x16, 0x1E, 0x1A, 0x00, 0x00],
    [0x00, 0x0E, 0x0E, 0x08, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x16, 0x16, 0x16, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x16, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x02, 0x12, 0x1A, 0x0E, 0x02, 0x00, 0x00],
    [0x00, 0x1A, 0x1E, 0x16, 0x1E, 0x1A, 0x00, 0x00],
    [0x00, 0x16, 0x16, 0x16, 0x1E, 0x1E, 0x00, 0x00],
    [0x14, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x34, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x08, 0x08, 0x08, 0x14, 0x14, 0x00, 0x00],
    [0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00],
    [0x00, 0x14, 0x14, 0x18, 0x08, 0x08, 0x00, 0x00],
    [0x02, 0x16, 0x16, 0x06, 0x06, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x0A, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x16, 0x1E, 0x1A, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x12, 0x12, 0x12, 0x12, 0x00],
    [0x00, 0x1E, 0x1E, 0x12, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x16, 0x16, 0x16, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x06, 0x06, 0x02, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x16, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x04, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1E, 0x1E, 0x00, 0x00, 0x00],
    [0x00, 0x10, 0x10, 0x10, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x0C, 0x12, 0x12, 0x00, 0x00],
    [0x00, 0x00, 0x1E, 0x1E, 0x10, 0x10, 0x00, 0x00],
    [0x1E, 0x1E, 0x0C, 0x18, 0x0C, 0x1E, 0x1E, 0x00],
    [0x00, 0x1E, 0x1E, 0x0C, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x12, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x0A, 0x0E, 0x0E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x12, 0x3E, 0x3E, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x06, 0x1E, 0x1A, 0x00, 0x00],
    [0x00, 0x16, 0x16, 0x16, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x02, 0x02, 0x1E, 0x1E, 0x02, 0x02, 0x00],
    [0x00, 0x1E, 0x1E, 0x10, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x02, 0x06, 0x18, 0x18, 0x0E, 0x02, 0x00],
    [0x1E, 0x1E, 0x10, 0x1E, 0x1E, 0x10, 0x1E, 0x1E],
    [0x00, 0x10, 0x1A, 0x0E, 0x0E, 0x1A, 0x10, 0x00],
    [0x00, 0x02, 0x06, 0x1C, 0x1C, 0x06, 0x02, 0x00],
    [0x00, 0x02, 0x12, 0x1A, 0x16, 0x12, 0x12, 0x00],
    [0x00, 0x00, 0x1E, 0x1E, 0x12, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x02, 0x06, 0x1C, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x12, 0x12, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x08, 0x0C, 0x06, 0x0E, 0x08, 0x00, 0x00],
    [0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x02, 0x02, 0x00, 0x00],
    [0x00, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x14, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x1C, 0x1C, 0x14, 0x14, 0x14, 0x00, 0x00],
    [0x00, 0x1C, 0x1C, 0x14, 0x1E, 0x1E, 0x00, 0x00],
    [0x00, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x1E, 0x1E, 0x06, 0x02, 0x00, 0x00],
    [0x00, 0x3C, 0x3C, 0x34, 0x3C, 0x3C, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x04, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1E, 0x1E, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x3E, 0x00, 0x00, 0x00],
    [0x00, 0x1E, 0x1E, 0x08, 0x14, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1E, 0x1E, 0x00, 0x00, 0x00],
    [0x1C, 0x1C, 0x04, 0x1C, 0x1C, 0x04, 0x1C, 0x1C],
    [0x00, 0x1C, 0x1C, 0x04, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x1C, 0x1C, 0x14, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x3C, 0x3C, 0x14, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x1C, 0x1C, 0x14, 0x3C, 0x3C, 0x00, 0x00],
    [0x00, 0x00, 0x1C, 0x1C, 0x04, 0x04, 0x00, 0x00],
    [0x00, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x1E, 0x1E, 0x14, 0x00, 0x00, 0x00],
    [0x00, 0x1C, 0x1C, 0x10, 0x1C, 0x1C, 0x00, 0x00],
    [0x00, 0x04, 0x1C, 0x18, 0x1C, 0x0C, 0x00, 0x00],
    [0x1C, 0x1C, 0x10, 0x1C, 0x1C, 0x1C, 0x1C, 0x00],
    [0x00, 0x00, 0x00, 0x14, 0x08, 0x1C, 0x14, 0x00],
    [0x00, 0x3C, 0x3C, 0x30, 0x3C, 0x3C, 0x00, 0x00],
    [0x00, 0x04, 0x14, 0x1C, 0x1C, 0x14, 0x00, 0x00],
    [0x00, 0x00, 0x1C, 0x3E, 0x22, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1E, 0x1E, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3E, 0x3C, 0x08, 0x00, 0x00, 0x00],
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x00, 0x00, 0x00],
];

/// Look up the glyph for a byte
pub fn glyph(font: &Font, byte: u8) -> &[u8; 8] {
    &font[usize::from(byte)]
}
