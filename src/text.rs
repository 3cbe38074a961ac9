//! Glyph rendering
//!
//! Text is written straight into controller RAM one glyph at a time. There is
//! no frame buffer: each glyph positions the cursor and streams its columns.
//!
//! ## Wrapping
//!
//! Before each glyph the pixel column is checked against the font's wrap
//! threshold (126 for small text, 120 for large). Past it, rendering moves to
//! column 0 of the next page. Large text only advances one page on a wrap, so
//! the next row overlaps the bottom half of the wrapped one.
//!
//! A glyph that would land below the last page ends rendering; the rest of
//! the string is dropped.

use log::debug;

use crate::addressing::PAGES;
use crate::display::{Display, DisplayResult};
use crate::font::{FontSize, large_glyph, small_glyph};
use crate::interface::DisplayInterface;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Render `text` starting at pixel column `x` on `page`
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use oled_i2c::{Builder, BusPins, Display, DisplayInterface, FontSize};
    /// # use core::convert::Infallible;
    /// # struct Sink;
    /// # impl DisplayInterface for Sink {
    /// #     type Error = Infallible;
    /// #     fn send_command(&mut self, _: u8) -> Result<(), Infallible> { Ok(()) }
    /// #     fn send_data(&mut self, _: u8) -> Result<(), Infallible> { Ok(()) }
    /// # }
    /// # let Ok(pins) = BusPins::new(4, 5) else { return };
    /// # let Ok(config) = Builder::new().pins(pins).build() else { return };
    /// let mut display = Display::new(Sink, config);
    /// let _ = display.init();
    /// let _ = display.draw_string(12, 2, FontSize::Large, "Hello");
    /// ```
    pub fn draw_string(&mut self, x: u16, page: u8, size: FontSize, text: &str) -> DisplayResult<I> {
        self.draw_chars(x, page, size, text.chars())
    }

    pub(crate) fn draw_chars<C>(
        &mut self,
        mut x: u16,
        mut page: u8,
        size: FontSize,
        chars: C,
    ) -> DisplayResult<I>
    where
        C: IntoIterator<Item = char>,
    {
        self.warn_if_uninitialized();

        for ch in chars {
            if x > size.wrap_threshold() {
                x = 0;
                page = page.saturating_add(1);
            }
            if u16::from(page) + u16::from(size.pages()) > u16::from(PAGES) {
                debug!("text reached page {page}, dropping the rest");
                break;
            }

            // Bounded by the wrap threshold above
            let column = x as u8;
            match size {
                FontSize::Small => {
                    self.set_cursor(column, page)?;
                    self.send_glyph_columns(small_glyph(ch))?;
                }
                FontSize::Large => {
                    let (top, bottom) = large_glyph(ch).split_at(8);
                    self.set_cursor(column, page)?;
                    self.send_glyph_columns(top)?;
                    self.set_cursor(column, page + 1)?;
                    self.send_glyph_columns(bottom)?;
                }
            }
            x += u16::from(size.glyph_width());
        }
        Ok(())
    }

    fn send_glyph_columns(&mut self, columns: &[u8]) -> DisplayResult<I> {
        for &column in columns {
            self.send_data(column)?;
        }
        Ok(())
    }
}
