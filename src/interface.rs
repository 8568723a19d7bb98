//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`] struct
//! for communicating with the SSD1306 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode only needs the two bus lines (SDA + SCL). There is
//! no data/command pin: every byte is preceded by a mode selector inside the
//! same transaction (see [`crate::command::CONTROL_MODE`] and
//! [`crate::command::DATA_MODE`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use oled128x64::{DisplayInterface, I2cInterface};
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
//! // Send command (display on)
//! let _ = interface.send_command(0x3C, 0xAF);
//!
//! // Send one byte of pixel data
//! let _ = interface.send_data(0x3C, 0xFF);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::command::{CONTROL_MODE, DATA_MODE};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the byte transport to an SSD1306 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Display`](crate::display::Display) to be driven against real hardware
/// or a recording fake in tests.
///
/// Both operations are synchronous and emit exactly one byte. The peripheral
/// address is owned by the driver and passed on every call.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single control (command) byte to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction could not complete.
    fn send_command(&mut self, address: u8, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a single data (pixel) byte to the controller
    ///
    /// The byte is written at the controller's current RAM pointer, which then
    /// auto-increments.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction could not complete.
    fn send_data(&mut self, address: u8, data: u8) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the I2C bus error type.
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// I2C interface implementation for SSD1306
///
/// Implements [`DisplayInterface`] for an embedded-hal v1.0 [`I2c`] bus.
/// Each byte is sent as its own two-byte write: `[mode, byte]`.
///
/// ## Example
///
/// ```rust,no_run
/// use oled128x64::{Display, I2cInterface};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{ErrorType, I2c, Operation};
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let interface = I2cInterface::new(MockI2c);
///
/// // Use with Display on the secondary address
/// let _display = Display::with_address(interface, 0x3D);
/// ```
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2C interface wrapping the bus
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the interface and return the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write(
        &mut self,
        address: u8,
        mode: u8,
        byte: u8,
    ) -> InterfaceResult<(), InterfaceError<I2C::Error>> {
        self.i2c
            .write(address, &[mode, byte])
            .map_err(|e| InterfaceError::I2c(e))
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, address: u8, command: u8) -> InterfaceResult<(), Self::Error> {
        self.write(address, CONTROL_MODE, command)
    }

    fn send_data(&mut self, address: u8, data: u8) -> InterfaceResult<(), Self::Error> {
        self.write(address, DATA_MODE, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_send_command_prefixes_control_mode() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_command(0x3C, 0xAF).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes, alloc::vec![(0x3C, alloc::vec![0x80, 0xAF])]);
    }

    #[test]
    fn test_send_data_prefixes_data_mode() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_data(0x3D, 0x7E).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes, alloc::vec![(0x3D, alloc::vec![0x40, 0x7E])]);
    }

    #[test]
    fn test_each_byte_is_its_own_transaction() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_command(0x3C, 0xB2).unwrap();
        interface.send_command(0x3C, 0x08).unwrap();
        interface.send_data(0x3C, 0xFF).unwrap();

        let i2c = interface.release();
        assert_eq!(i2c.writes.len(), 3);
        assert!(i2c.writes.iter().all(|(_, bytes)| bytes.len() == 2));
    }

    #[test]
    fn test_bus_failure_is_reported() {
        let mut interface = I2cInterface::new(MockI2c {
            fail: true,
            ..MockI2c::default()
        });
        let result = interface.send_command(0x3C, 0xAE);
        assert!(matches!(result, Err(InterfaceError::I2c(MockError))));
    }
}
