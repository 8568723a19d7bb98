//! Graphics support via embedded-graphics
//!
//! [`Display`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem on top of its framebuffer cache.
//!
//! Drawing only edits the cache; call [`Display::flush`] to send the result
//! to the panel. Unlike [`Display::set_pixel`], `BinaryColor::Off` clears the
//! pixel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use oled128x64::{Display, I2cInterface};
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
//! let mut display = Display::with_address(I2cInterface::new(MockI2c), 0x3C);
//! let _ = display.init();
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 64))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(96, 20), 24)
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, OLED!",
//!     Point::new(6, 40),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::config::{HEIGHT, WIDTH};
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let col = x as usize;
            let row = y as usize;

            if col >= WIDTH || row >= HEIGHT {
                continue;
            }

            let buffer = self.buffer_mut();
            match color {
                BinaryColor::On => {
                    buffer.set_bit(row, col);
                }
                BinaryColor::Off => buffer.clear_bit(row, col),
            }
        }

        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[derive(Debug, Default)]
    struct MockInterface {
        writes: usize,
    }

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn send_command(&mut self, _address: u8, _command: u8) -> Result<(), Self::Error> {
            self.writes += 1;
            Ok(())
        }

        fn send_data(&mut self, _address: u8, _data: u8) -> Result<(), Self::Error> {
            self.writes += 1;
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::default(), Config::default())
    }

    #[test]
    fn test_size() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(128, 64));
    }

    #[test]
    fn test_drawing_edits_cache_only() {
        let mut display = test_display();
        Line::new(Point::new(0, 9), Point::new(127, 9))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();

        assert!((0..128).all(|col| display.buffer().get(col, 1) == Some(0x02)));
        assert_eq!(display.release().writes, 0);
    }

    #[test]
    fn test_off_clears_pixels() {
        let mut display = test_display();
        Rectangle::new(Point::new(0, 0), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        Pixel(Point::new(2, 3), BinaryColor::Off)
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.buffer().get(2, 0), Some(0xF7));
        assert_eq!(display.buffer().get(3, 0), Some(0xFF));
    }

    #[test]
    fn test_out_of_bounds_pixels_are_skipped() {
        let mut display = test_display();
        let pixels = [
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(0, -1), BinaryColor::On),
            Pixel(Point::new(128, 0), BinaryColor::On),
            Pixel(Point::new(0, 64), BinaryColor::On),
        ];
        display.draw_iter(pixels).unwrap();
        assert!(display.buffer().is_blank());
    }

    #[test]
    fn test_clear_fills_whole_cache() {
        let mut display = test_display();
        DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
        assert!((0..128).all(|col| (0..8).all(|page| display.buffer().get(col, page) == Some(0xFF))));
    }
}
