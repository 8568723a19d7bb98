//! Core display operations

use log::{debug, trace};

use crate::command::{
    CHARGE_PUMP, COM_SCAN_DEC, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF, DISPLAY_ON, HIGH_COLUMN,
    HORIZONTAL_ADDRESSING, INVERT_DISPLAY, LOW_COLUMN, NORMAL_DISPLAY, PAGE_ADDRESS, SCROLL_OFF,
    SEGMENT_REMAP, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_CLOCK_DIV, SET_DISPLAY_OFFSET,
    SET_MEMORY_MODE, SET_MULTIPLEX, SET_PRECHARGE, SET_START_LINE, SET_VCOM_DETECT,
};
use crate::config::{Builder, CHAR_COLUMNS, CacheMode, Config, FRAME_SIZE, HEIGHT, PAGES, WIDTH};
use crate::error::Error;
use crate::font::{DEFAULT_FONT, Font, glyph};
use crate::framebuffer::{FrameBuffer, RamPointer, locate};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Pixel column of the progress bar's left border
const BAR_LEFT_EDGE: u8 = 12;
/// Pixel column of the progress bar's right border
const BAR_RIGHT_EDGE: u8 = 113;
/// First pixel column of the bar body
const BAR_START: u8 = 13;
/// Width of the bar body in pixel columns, one per percent
const BAR_WIDTH: u8 = 100;
/// Column pattern for borders and filled bar columns
const BAR_FILLED: u8 = 0x7E;
/// Column pattern for unfilled bar columns (top and bottom outline only)
const BAR_EMPTY: u8 = 0x42;

/// Core display driver for a 128x64 SSD1306 panel
///
/// Owns the peripheral address, the bus interface and a cached copy of the
/// panel contents. Nothing is sent until [`init`](Self::init) is called.
///
/// The controller's RAM pointer is never read back: every operation first
/// re-addresses the page and column it writes to. Clearing operations, and
/// drawing operations that move the pointer across the panel, finish by
/// resetting it to the origin, so callers must not rely on its position
/// between calls.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Cached panel contents
    buffer: FrameBuffer,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        debug!("creating display at address {:#04x}", config.address);
        Self {
            interface,
            config,
            buffer: FrameBuffer::new(),
        }
    }

    /// Create a Display with default settings on the given address
    pub fn with_address(interface: I, address: u8) -> Self {
        Self::new(interface, Builder::new().address(address).build())
    }

    /// Current peripheral address
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Change the peripheral address used for subsequent transactions
    pub fn set_address(&mut self, address: u8) {
        self.config.address = address;
    }

    /// Run the bring-up sequence, clear the panel and cache, and power on
    ///
    /// The command order and operands follow the SSD1306 128x64 reference
    /// initialization; with a default [`Config`] the emitted bytes are fixed.
    pub fn init(&mut self) -> DisplayResult<I> {
        debug!("initializing display at {:#04x}", self.config.address);
        let c = &self.config;
        let sequence = [
            DISPLAY_OFF,
            NORMAL_DISPLAY,
            SET_DISPLAY_CLOCK_DIV,
            c.clock_div,
            SET_MULTIPLEX,
            c.multiplex,
            SET_DISPLAY_OFFSET,
            c.display_offset,
            SET_START_LINE,
            CHARGE_PUMP,
            c.charge_pump,
            SET_MEMORY_MODE,
            HORIZONTAL_ADDRESSING,
            SEGMENT_REMAP,
            COM_SCAN_DEC,
            SET_COM_PINS,
            c.com_pins,
            SET_CONTRAST,
            c.contrast,
            SET_PRECHARGE,
            c.precharge,
            SET_VCOM_DETECT,
            c.vcom_detect,
            DISPLAY_ALL_ON_RESUME,
            SEGMENT_REMAP,
            SEGMENT_REMAP | 0x01,
            SCROLL_OFF,
        ];
        for cmd in sequence {
            self.send_command(cmd)?;
        }

        self.clear()?;
        self.power_on()
    }

    /// Turn the panel on (0xAF)
    pub fn power_on(&mut self) -> DisplayResult<I> {
        debug!("display on");
        self.send_command(DISPLAY_ON)
    }

    /// Turn the panel off (0xAE)
    ///
    /// Display RAM is retained while the panel is off.
    pub fn power_off(&mut self) -> DisplayResult<I> {
        debug!("display off");
        self.send_command(DISPLAY_OFF)
    }

    /// Select inverted (`true`) or normal (`false`) video mode
    ///
    /// The cache is not affected.
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        debug!("inverted display: {}", inverted);
        let cmd = if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        };
        self.send_command(cmd)
    }

    /// Change the contrast level at runtime
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.send_command(SET_CONTRAST)?;
        self.send_command(contrast)?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Light a single pixel
    ///
    /// The pixel's bit is OR'd into the cached byte, then the whole 8-row byte
    /// is re-sent. Pixels are only ever set: `on == false` leaves the cached
    /// bit as it was, but the byte is still re-sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::RowOutOfRange` or `Error::ColumnOutOfRange` for
    /// coordinates outside the panel.
    pub fn set_pixel(&mut self, row: u8, col: u8, on: bool) -> DisplayResult<I> {
        Self::check_row(row)?;
        Self::check_col(col)?;

        let (page, _) = locate(usize::from(row));
        let byte = if on {
            self.buffer.set_bit(usize::from(row), usize::from(col))
        } else {
            self.buffer
                .get(usize::from(col), page)
                .unwrap_or_default()
        };

        self.point_to(page as u8, col)?;
        self.send_data(byte)
    }

    /// Point the controller at a character cell
    ///
    /// `char_col` counts 8-pixel-wide cells, so the pixel column is
    /// `8 * char_col`.
    pub fn set_char_cursor(&mut self, page: u8, char_col: u8) -> DisplayResult<I> {
        Self::check_page(page)?;
        Self::check_char_col(char_col)?;
        self.point_to(page, char_col * 8)
    }

    /// Point the controller at a page and pixel column
    pub fn set_cursor(&mut self, page: u8, col: u8) -> DisplayResult<I> {
        Self::check_page(page)?;
        Self::check_col(col)?;
        self.point_to(page, col)
    }

    /// Zero the whole panel and the cache, then reset the cursor to the origin
    pub fn clear(&mut self) -> DisplayResult<I> {
        debug!("clearing display");
        for page in 0..PAGES as u8 {
            self.point_to(page, 0)?;
            for _ in 0..WIDTH {
                self.send_data(0x00)?;
            }
        }
        self.point_to(0, 0)?;

        self.buffer.clear();
        self.point_to(0, 0)
    }

    /// Zero one 8x8 character cell on the panel and in the cache
    pub fn clear_char(&mut self, page: u8, char_col: u8) -> DisplayResult<I> {
        Self::check_page(page)?;
        Self::check_char_col(char_col)?;

        self.clear_cell(page, char_col)?;
        self.point_to(0, 0)
    }

    /// Zero all 16 character cells of a page
    pub fn clear_char_row(&mut self, page: u8) -> DisplayResult<I> {
        Self::check_page(page)?;

        for char_col in 0..CHAR_COLUMNS as u8 {
            self.clear_cell(page, char_col)?;
        }
        self.point_to(0, 0)
    }

    /// Draw text with the built-in font, starting at a character cell
    ///
    /// Each byte of `text` is one 8x8 glyph, so `&str` and raw byte slices
    /// both work and every one of the 256 font entries is reachable. Text is
    /// not wrapped: glyphs past the right edge land wherever the controller's
    /// pointer goes next.
    pub fn draw_str(
        &mut self,
        text: impl AsRef<[u8]>,
        page: u8,
        char_col: u8,
    ) -> DisplayResult<I> {
        self.draw_str_with_font(text, page, char_col, &DEFAULT_FONT)
    }

    /// Draw text with a caller-provided font
    pub fn draw_str_with_font(
        &mut self,
        text: impl AsRef<[u8]>,
        page: u8,
        char_col: u8,
        font: &Font,
    ) -> DisplayResult<I> {
        Self::check_page(page)?;
        Self::check_char_col(char_col)?;

        let col = char_col * 8;
        self.point_to(page, col)?;
        let mut ptr = RamPointer::new(usize::from(page), usize::from(col));
        for &byte in text.as_ref() {
            for &column in glyph(font, byte) {
                self.stream(&mut ptr, column)?;
            }
        }
        Ok(())
    }

    /// Clear the panel and stream a full frame from the origin
    ///
    /// `data` is page-major: 128 column bytes for page 0, then page 1, and so
    /// on. Only the first 1024 bytes are used.
    ///
    /// # Errors
    ///
    /// Returns `Error::ImageTooSmall` if `data` holds less than one frame.
    /// Nothing is sent in that case.
    pub fn draw_image(&mut self, data: &[u8]) -> DisplayResult<I> {
        if data.len() < FRAME_SIZE {
            return Err(Error::ImageTooSmall {
                required: FRAME_SIZE,
                provided: data.len(),
            });
        }

        debug!("drawing {} byte image", FRAME_SIZE);
        self.clear()?;
        self.point_to(0, 0)?;
        let mut ptr = RamPointer::new(0, 0);
        for &byte in &data[..FRAME_SIZE] {
            self.stream(&mut ptr, byte)?;
        }
        Ok(())
    }

    /// Draw a full-width horizontal line on a pixel row
    ///
    /// Every column of the row's page is overwritten with the row's single
    /// bit, so other lit pixels in that page are erased on the panel.
    pub fn draw_hline(&mut self, row: u8) -> DisplayResult<I> {
        Self::check_row(row)?;

        let (page, mask) = locate(usize::from(row));
        self.point_to(page as u8, 0)?;
        let mut ptr = RamPointer::new(page, 0);
        for _ in 0..WIDTH {
            self.stream(&mut ptr, mask)?;
        }
        self.point_to(0, 0)
    }

    /// Draw a full-height vertical line on a pixel column
    pub fn draw_vline(&mut self, col: u8) -> DisplayResult<I> {
        Self::check_col(col)?;

        for page in 0..PAGES as u8 {
            self.point_to(page, col)?;
            let mut ptr = RamPointer::new(usize::from(page), usize::from(col));
            self.stream(&mut ptr, 0xFF)?;
        }
        self.point_to(0, 0)
    }

    /// Draw a progress bar across a page
    ///
    /// The bar has borders at pixel columns 12 and 113 and a 100-column body
    /// starting at column 13. Body column `i` is drawn filled when
    /// `i <= percent` and as an outline otherwise. The whole body is redrawn
    /// on every call; at 0% the page is cleared first.
    pub fn draw_progress_bar(&mut self, page: u8, percent: u8) -> DisplayResult<I> {
        Self::check_page(page)?;
        if percent > 100 {
            return Err(Error::PercentOutOfRange { percent });
        }

        if percent == 0 {
            self.clear_char_row(page)?;
        }

        for edge in [BAR_LEFT_EDGE, BAR_RIGHT_EDGE] {
            self.point_to(page, edge)?;
            let mut ptr = RamPointer::new(usize::from(page), usize::from(edge));
            self.stream(&mut ptr, BAR_FILLED)?;
        }

        self.point_to(page, BAR_START)?;
        let mut ptr = RamPointer::new(usize::from(page), usize::from(BAR_START));
        for i in 0..BAR_WIDTH {
            let byte = if i <= percent { BAR_FILLED } else { BAR_EMPTY };
            self.stream(&mut ptr, byte)?;
        }
        Ok(())
    }

    /// Re-send the whole cache to the panel
    ///
    /// Each page is addressed and written in full; the cursor is reset to the
    /// origin afterwards.
    pub fn flush(&mut self) -> DisplayResult<I> {
        debug!("flushing framebuffer");
        for page in 0..PAGES {
            let mut bytes = [0u8; WIDTH];
            for (slot, byte) in bytes.iter_mut().zip(self.buffer.page(page)) {
                *slot = byte;
            }
            self.point_to(page as u8, 0)?;
            for byte in bytes {
                self.send_data(byte)?;
            }
        }
        self.point_to(0, 0)
    }

    /// Cached panel contents
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    #[cfg(feature = "graphics")]
    pub(crate) fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Zero one character cell in the cache, then on the panel
    fn clear_cell(&mut self, page: u8, char_col: u8) -> DisplayResult<I> {
        self.buffer
            .clear_cell(usize::from(page), usize::from(char_col));

        self.point_to(page, char_col * 8)?;
        for _ in 0..8 {
            self.send_data(0x00)?;
        }
        Ok(())
    }

    /// Send the page and column address commands
    fn point_to(&mut self, page: u8, col: u8) -> DisplayResult<I> {
        trace!("cursor -> page {} col {}", page, col);
        self.send_command(PAGE_ADDRESS | page)?;
        self.send_command(LOW_COLUMN | (col & 0x0F))?;
        self.send_command(HIGH_COLUMN | ((col >> 4) & 0x0F))
    }

    /// Send a data byte at the modelled pointer, mirroring it into the cache
    /// when [`CacheMode::Mirror`] is selected
    fn stream(&mut self, ptr: &mut RamPointer, byte: u8) -> DisplayResult<I> {
        self.send_data(byte)?;
        if self.config.cache_mode == CacheMode::Mirror {
            self.buffer.set(ptr.col, ptr.page, byte);
        }
        ptr.advance();
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface
            .send_command(self.config.address, cmd)
            .map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: u8) -> DisplayResult<I> {
        self.interface
            .send_data(self.config.address, data)
            .map_err(Error::Interface)
    }

    fn check_page(page: u8) -> DisplayResult<I> {
        if usize::from(page) >= PAGES {
            return Err(Error::PageOutOfRange { page });
        }
        Ok(())
    }

    fn check_col(col: u8) -> DisplayResult<I> {
        if usize::from(col) >= WIDTH {
            return Err(Error::ColumnOutOfRange { col });
        }
        Ok(())
    }

    fn check_char_col(col: u8) -> DisplayResult<I> {
        if usize::from(col) >= CHAR_COLUMNS {
            return Err(Error::CharColumnOutOfRange { col });
        }
        Ok(())
    }

    fn check_row(row: u8) -> DisplayResult<I> {
        if usize::from(row) >= HEIGHT {
            return Err(Error::RowOutOfRange { row });
        }
        Ok(())
    }
}
