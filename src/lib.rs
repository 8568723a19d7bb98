//! SSD1306 128x64 OLED Display Driver
//!
//! A driver for 128x64 monochrome OLED panels built on the SSD1306 controller,
//! connected over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Built-in 8x8 font for text on a 16x8 character grid
//! - Full-frame images, lines and progress bars
//! - Framebuffer cache with per-pixel updates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use oled128x64::{Display, I2cInterface};
//!
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
//! # let i2c = MockI2c;
//! let interface = I2cInterface::new(i2c);
//! let mut display = Display::with_address(interface, 0x3C);
//!
//! if display.init().is_err() {
//!     return;
//! }
//! let _ = display.draw_str("Hello, world!", 0, 0);
//! let _ = display.draw_progress_bar(4, 42);
//! let _ = display.set_pixel(63, 127, true);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 8x8 bitmap font
pub mod font;
/// Framebuffer cache and RAM pointer model
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{Builder, CacheMode, Config, FRAME_SIZE, HEIGHT, PAGES, WIDTH};
pub use display::Display;
pub use error::Error;
pub use font::{DEFAULT_FONT, Font};
pub use framebuffer::FrameBuffer;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, I2cInterface};
