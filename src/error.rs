//! Error types for the driver
//!
//! This module defines [`Error`], returned by every [`Display`](crate::Display)
//! operation that talks to the controller.
//!
//! ## Error Classes
//!
//! - [`Error::Interface`] - the bus transaction could not complete. The driver
//!   never retries; a failure partway through a multi-byte operation leaves the
//!   cache and the panel diverged.
//! - Range errors - an argument was outside the panel geometry. These are
//!   raised before any byte is sent, so a rejected call has no side effects.
//!
//! ## Example
//!
//! ```
//! use oled128x64::{Display, DisplayInterface, Error};
//! # use core::convert::Infallible;
//! # struct NullInterface;
//! # impl DisplayInterface for NullInterface {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _address: u8, _command: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn send_data(&mut self, _address: u8, _data: u8) -> Result<(), Infallible> { Ok(()) }
//! # }
//! let mut display = Display::with_address(NullInterface, 0x3C);
//!
//! // Page 8 does not exist on a 64-row panel
//! let result = display.set_cursor(8, 0);
//! assert!(matches!(result, Err(Error::PageOutOfRange { page: 8 })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Page index outside 0-7
    PageOutOfRange {
        /// Requested page
        page: u8,
    },
    /// Pixel column outside 0-127
    ColumnOutOfRange {
        /// Requested pixel column
        col: u8,
    },
    /// Character column outside 0-15
    CharColumnOutOfRange {
        /// Requested character column
        col: u8,
    },
    /// Pixel row outside 0-63
    RowOutOfRange {
        /// Requested pixel row
        row: u8,
    },
    /// Progress value above 100
    PercentOutOfRange {
        /// Requested percentage
        percent: u8,
    },
    /// Image data is shorter than one full frame
    ///
    /// A frame is `128 * 64 / 8 = 1024` bytes.
    ImageTooSmall {
        /// Required image size in bytes
        required: usize,
        /// Provided image size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::PageOutOfRange { page } => f
                .debug_struct("PageOutOfRange")
                .field("page", page)
                .finish(),
            Self::ColumnOutOfRange { col } => f
                .debug_struct("ColumnOutOfRange")
                .field("col", col)
                .finish(),
            Self::CharColumnOutOfRange { col } => f
                .debug_struct("CharColumnOutOfRange")
                .field("col", col)
                .finish(),
            Self::RowOutOfRange { row } => f
                .debug_struct("RowOutOfRange")
                .field("row", row)
                .finish(),
            Self::PercentOutOfRange { percent } => f
                .debug_struct("PercentOutOfRange")
                .field("percent", percent)
                .finish(),
            Self::ImageTooSmall { required, provided } => f
                .debug_struct("ImageTooSmall")
                .field("required", required)
                .field("provided", provided)
                .finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::PageOutOfRange { page } => write!(f, "Page out of range: {page} (max 7)"),
            Self::ColumnOutOfRange { col } => write!(f, "Column out of range: {col} (max 127)"),
            Self::CharColumnOutOfRange { col } => {
                write!(f, "Character column out of range: {col} (max 15)")
            }
            Self::RowOutOfRange { row } => write!(f, "Row out of range: {row} (max 63)"),
            Self::PercentOutOfRange { percent } => {
                write!(f, "Percent out of range: {percent} (max 100)")
            }
            Self::ImageTooSmall { required, provided } => {
                write!(
                    f,
                    "Image too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::convert::Infallible;

    struct NullInterface;

    impl DisplayInterface for NullInterface {
        type Error = Infallible;

        fn send_command(&mut self, _address: u8, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _address: u8, _data: u8) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_display_messages() {
        let err: Error<NullInterface> = Error::ImageTooSmall {
            required: 1024,
            provided: 10,
        };
        assert_eq!(
            err.to_string(),
            "Image too small: required 1024 bytes, provided 10"
        );

        let err: Error<NullInterface> = Error::PageOutOfRange { page: 9 };
        assert_eq!(err.to_string(), "Page out of range: 9 (max 7)");
    }

    #[test]
    fn test_debug_does_not_require_debug_interface() {
        let err: Error<NullInterface> = Error::RowOutOfRange { row: 70 };
        assert_eq!(alloc::format!("{err:?}"), "RowOutOfRange { row: 70 }");
    }
}
