//! SSD1306 command definitions
//!
//! This module defines the command bytes used to drive the SSD1306 OLED
//! controller over I2C. Every byte travels in its own bus transaction,
//! preceded by a mode selector telling the controller how to interpret it.
//!
//! ## Transaction Structure
//!
//! 1. Start condition + 7-bit peripheral address (write)
//! 2. Mode selector: [`CONTROL_MODE`] for commands, [`DATA_MODE`] for pixel data
//! 3. Payload byte
//! 4. Stop condition
//!
//! ## Example
//!
//! ```rust,no_run
//! use oled128x64::{command, DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Turn the panel on
//! let _ = interface.send_command(command::DEFAULT_ADDRESS, command::DISPLAY_ON);
//!
//! // Address page 2, column 0 and light up one column
//! let _ = interface.send_command(command::DEFAULT_ADDRESS, command::PAGE_ADDRESS | 2);
//! let _ = interface.send_data(command::DEFAULT_ADDRESS, 0xFF);
//! ```

// Bus framing

/// Default 7-bit I2C address of SSD1306 modules (0x3C)
///
/// Modules with the SA0 pin pulled high answer on 0x3D instead.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Mode selector for a single command byte (0x80)
pub const CONTROL_MODE: u8 = 0x80;

/// Mode selector for a single data byte (0x40)
pub const DATA_MODE: u8 = 0x40;

// Fundamental commands

/// Set contrast control (0x81)
///
/// Requires 1 operand: contrast level 0x00-0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal (non-inverted) video mode (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted video mode (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off / sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling

/// Deactivate scrolling (0x2E)
pub const SCROLL_OFF: u8 = 0x2E;

/// Activate scrolling (0x2F)
pub const SCROLL_ON: u8 = 0x2F;

// Addressing

/// Set memory addressing mode (0x20)
///
/// Requires 1 operand: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing operand for [`SET_MEMORY_MODE`] (0x00)
///
/// The RAM pointer advances column by column and wraps to the next page.
pub const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// Lower column start address base (0x00)
///
/// OR'd with the low nibble of the target column.
pub const LOW_COLUMN: u8 = 0x00;

/// Higher column start address base (0x10)
///
/// OR'd with the high nibble of the target column.
pub const HIGH_COLUMN: u8 = 0x10;

/// Page start address base (0xB0)
///
/// OR'd with the page index (0-7).
pub const PAGE_ADDRESS: u8 = 0xB0;

// Hardware configuration

/// Set display start line base (0x40)
///
/// OR'd with the start line (0-63).
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap, column 0 mapped to SEG0 (0xA0)
///
/// OR with 0x01 to map column 127 to SEG0 (horizontal mirroring).
pub const SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 operand: mux ratio - 1 (0x3F for 64 rows).
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction, normal (0xC0)
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 operand: vertical shift 0-63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 operand. 128x64 panels use 0x12 (alternative COM pin layout).
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Requires 1 operand: high nibble = frequency, low nibble = divide ratio - 1.
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 operand: high nibble = phase 2, low nibble = phase 1.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 operand.
pub const SET_VCOM_DETECT: u8 = 0xDB;

// Charge pump

/// Charge pump setting (0x8D)
///
/// Requires 1 operand: 0x14 = enable, 0x10 = disable.
pub const CHARGE_PUMP: u8 = 0x8D;
