//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which wraps [`Display`]
//! with a frame buffer and implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem.
//!
//! The buffer mirrors controller RAM: one byte per column per page, all 132
//! columns included. Drawing only touches the buffer; [`GraphicDisplay::flush`]
//! streams it to the panel page by page.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use oled_i2c::{Color, GraphicDisplay, addressing::BUFFER_SIZE};
//! # use core::convert::Infallible;
//! # use oled_i2c::{Builder, BusPins, Display, DisplayInterface};
//! # struct Sink;
//! # impl DisplayInterface for Sink {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _: u8) -> Result<(), Infallible> { Ok(()) }
//! #     fn send_data(&mut self, _: u8) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let Ok(pins) = BusPins::new(4, 5) else { return };
//! # let Ok(config) = Builder::new().pins(pins).build() else { return };
//! # let display_driver = Display::new(Sink, config);
//! let mut display = GraphicDisplay::new(display_driver, [0u8; BUFFER_SIZE]);
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 64))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Text::new("Hello, OLED!", Point::new(4, 12), MonoTextStyle::new(&FONT_6X10, Color::On))
//!     .draw(&mut display);
//!
//! // Push the buffer to the panel
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::addressing::{BUFFER_SIZE, COLUMNS, HEIGHT, PAGES, WIDTH, pixel_offset};
use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Display with a frame buffer
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Buffer type implementing `AsMut<[u8]>`, at least
///   [`BUFFER_SIZE`] bytes
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I>,
    /// Page-organised pixel buffer
    buffer: B,
}

type GraphicsNewResult<I, T> = core::result::Result<T, Error<I>>;

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is smaller than [`BUFFER_SIZE`].
    pub fn new(display: Display<I>, mut buffer: B) -> Self {
        assert!(
            buffer.as_mut().len() >= BUFFER_SIZE,
            "buffer too small: required {} bytes, got {}",
            BUFFER_SIZE,
            buffer.as_mut().len()
        );
        Self { display, buffer }
    }

    /// Try to create a new GraphicDisplay, returning an error if the buffer is too small
    ///
    /// This is the fallible version of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `buffer` is smaller than
    /// [`BUFFER_SIZE`].
    pub fn try_new(display: Display<I>, mut buffer: B) -> GraphicsNewResult<I, Self> {
        let provided = buffer.as_mut().len();
        if provided < BUFFER_SIZE {
            return Err(Error::BufferTooSmall {
                required: BUFFER_SIZE,
                provided,
            });
        }
        Ok(Self { display, buffer })
    }

    /// Set every buffered pixel to `color`
    ///
    /// Only the buffer changes; call [`flush`](Self::flush) to show it.
    pub fn clear(&mut self, color: Color) {
        let byte = color.fill_byte();
        for slot in self.buffer.as_mut()[..BUFFER_SIZE].iter_mut() {
            *slot = byte;
        }
    }

    /// Write the whole buffer to controller RAM
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on the first failed bus write. Pages
    /// before it have already been updated.
    pub fn flush(&mut self) -> DisplayResult<I> {
        let columns = COLUMNS as usize;
        let buffer = self.buffer.as_mut();
        for page in 0..PAGES {
            let start = page as usize * columns;
            self.display
                .write_page(page, &buffer[start..start + columns])?;
        }
        Ok(())
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Direct drawing through the driver bypasses the buffer and is
    /// overwritten by the next [`flush`](Self::flush).
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Consume the wrapper and hand back the driver and buffer
    pub fn release(self) -> (Display<I>, B) {
        (self.display, self.buffer)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }

        let (index, bit) = pixel_offset(x, y);
        let byte = &mut self.buffer.as_mut()[index];
        if color.is_on() {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }
}

impl<I, B> DrawTarget for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, color);
        }

        Ok(())
    }
}

impl<I, B> OriginDimensions for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::tests::test_display;
    use crate::interface::mock::RecordingInterface;
    use embedded_graphics::{
        Drawable,
        mono_font::{MonoTextStyle, ascii::FONT_6X10},
        text::Text,
    };

    fn test_graphic_display() -> GraphicDisplay<RecordingInterface, [u8; BUFFER_SIZE]> {
        GraphicDisplay::new(test_display(), [0u8; BUFFER_SIZE])
    }

    #[test]
    fn test_size_covers_controller_ram() {
        let gd = test_graphic_display();
        assert_eq!(gd.size(), Size::new(132, 64));
    }

    #[test]
    fn test_try_new_small_buffer_returns_error() {
        let result = GraphicDisplay::try_new(test_display(), [0u8; BUFFER_SIZE - 1]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 1056,
                provided: 1055
            })
        ));
    }

    #[test]
    fn test_try_new_valid_buffer_succeeds() {
        let result = GraphicDisplay::try_new(test_display(), alloc::vec![0u8; BUFFER_SIZE]);
        assert!(result.is_ok());
    }

    #[test]
    #[should_panic(expected = "buffer too small")]
    fn test_new_panics_on_small_buffer() {
        let _ = GraphicDisplay::new(test_display(), [0u8; 16]);
    }

    #[test]
    fn test_set_pixel_sets_page_bit() {
        let mut gd = test_graphic_display();
        gd.set_pixel(3, 9, Color::On);
        let (_, mut buffer) = gd.release();
        assert_eq!(buffer.as_mut()[132 + 3], 0x02);

        let mut gd = GraphicDisplay::new(test_display(), buffer);
        gd.set_pixel(3, 9, Color::Off);
        let (_, buffer) = gd.release();
        assert!(buffer.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_out_of_range_pixels_are_ignored() {
        let mut gd = test_graphic_display();
        let pixels = [
            Pixel(Point::new(-1, 0), Color::On),
            Pixel(Point::new(0, -1), Color::On),
            Pixel(Point::new(132, 0), Color::On),
            Pixel(Point::new(0, 64), Color::On),
        ];
        gd.draw_iter(pixels).unwrap();
        let (_, buffer) = gd.release();
        assert!(buffer.iter().all(|b| *b == 0));
    }

    #[test]
    fn test_flush_writes_every_page() {
        let mut gd = test_graphic_display();
        gd.clear(Color::On);
        gd.flush().unwrap();

        let (display, _) = gd.release();
        let interface = display.release();
        assert_eq!(interface.writes.len(), 8 * (3 + 132));
        assert!(interface.data().iter().all(|b| *b == 0xFF));
        assert_eq!(&interface.commands()[..6], &[0xB0, 0x00, 0x10, 0xB1, 0x00, 0x10]);
    }

    #[test]
    fn test_text_reaches_the_panel() {
        let mut gd = test_graphic_display();
        Text::new(
            "Hi",
            Point::new(0, 8),
            MonoTextStyle::new(&FONT_6X10, Color::On),
        )
        .draw(&mut gd)
        .unwrap();
        gd.flush().unwrap();

        let (display, _) = gd.release();
        let data = display.release().data();
        assert!(data[..132].iter().any(|b| *b != 0));
        // Nothing below the second page
        assert!(data[2 * 132..].iter().all(|b| *b == 0));
    }
}
