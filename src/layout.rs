//! Character-cell and line helpers on top of the glyph renderer

use core::iter;

use log::debug;

use crate::display::{Display, DisplayResult};
use crate::font::FontSize;
use crate::interface::DisplayInterface;

/// First page of 1-based text `line`
///
/// Small lines are one page apart, large lines two. Returns `None` for line 0.
/// Lines below the panel still map to a page; the renderer drops them.
pub fn line_page(line: u8, size: FontSize) -> Option<u8> {
    line.checked_sub(1)?.checked_mul(size.pages())
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Render `text` at character cell `cell_x` on `page`
    ///
    /// The cell is scaled by the glyph width, so cell 5 is pixel column 30
    /// for small text and 40 for large text.
    pub fn draw_at(&mut self, cell_x: u8, page: u8, size: FontSize, text: &str) -> DisplayResult<I> {
        self.draw_string(size.pixel_column(cell_x), page, size, text)
    }

    /// Replace the content of text `line` with `text`
    ///
    /// Lines are numbered from 1. The text is padded with spaces or cut to
    /// exactly one line (21 small or 16 large characters), so the whole row
    /// is overwritten. Line 0 draws nothing.
    pub fn draw_line(&mut self, line: u8, size: FontSize, text: &str) -> DisplayResult<I> {
        let Some(page) = line_page(line, size) else {
            debug!("line 0 requested, nothing drawn");
            return Ok(());
        };

        let padded = text
            .chars()
            .chain(iter::repeat(' '))
            .take(size.line_budget());
        self.draw_chars(0, page, size, padded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::tests::test_display;
    use crate::font::{large_glyph, small_glyph};
    use alloc::vec::Vec;

    #[test]
    fn test_line_page() {
        assert_eq!(line_page(0, FontSize::Small), None);
        assert_eq!(line_page(1, FontSize::Small), Some(0));
        assert_eq!(line_page(8, FontSize::Small), Some(7));
        assert_eq!(line_page(3, FontSize::Large), Some(4));
        assert_eq!(line_page(4, FontSize::Large), Some(6));
    }

    #[test]
    fn test_draw_at_scales_small_cells() {
        let mut display = test_display();
        display.draw_at(5, 1, FontSize::Small, "A").unwrap();

        // Column 30
        assert_eq!(display.release().commands(), alloc::vec![0xB1, 0x11, 0x0F]);
    }

    #[test]
    fn test_draw_at_scales_large_cells() {
        let mut display = test_display();
        display.draw_at(5, 0, FontSize::Large, "A").unwrap();

        // Column 40
        assert_eq!(
            display.release().commands(),
            alloc::vec![0xB0, 0x12, 0x09, 0xB1, 0x12, 0x09]
        );
    }

    #[test]
    fn test_draw_at_large_cell_wraps() {
        let mut display = test_display();
        // Cell 16 is column 128, already past the wrap threshold
        display.draw_at(16, 2, FontSize::Large, "A").unwrap();
        assert_eq!(
            display.release().commands(),
            alloc::vec![0xB3, 0x10, 0x01, 0xB4, 0x10, 0x01]
        );
    }

    #[test]
    fn test_short_line_is_padded() {
        let mut display = test_display();
        display.draw_line(1, FontSize::Small, "Hi").unwrap();

        let data = display.release().data();
        assert_eq!(data.len(), 21 * 6);

        let mut expected: Vec<u8> = Vec::new();
        expected.extend_from_slice(small_glyph('H'));
        expected.extend_from_slice(small_glyph('i'));
        for _ in 0..19 {
            expected.extend_from_slice(small_glyph(' '));
        }
        assert_eq!(data, expected);
    }

    #[test]
    fn test_long_line_is_truncated() {
        let mut display = test_display();
        display
            .draw_line(2, FontSize::Small, "abcdefghijklmnopqrstuvwxyz")
            .unwrap();

        let interface = display.release();
        assert_eq!(interface.data().len(), 21 * 6);
        // Every glyph stays on page 1
        assert!(
            interface
                .commands()
                .chunks(3)
                .all(|cursor| cursor[0] == 0xB1)
        );
    }

    #[test]
    fn test_lines_overwrite_previous_content_fully() {
        let mut long = test_display();
        long.draw_line(1, FontSize::Small, "HELLO WORLD").unwrap();
        let mut short = test_display();
        short.draw_line(1, FontSize::Small, "HI").unwrap();

        assert_eq!(long.release().writes.len(), short.release().writes.len());
    }

    #[test]
    fn test_large_line_three_starts_on_page_four() {
        let mut display = test_display();
        display.draw_line(3, FontSize::Large, "A").unwrap();

        let interface = display.release();
        let commands = interface.commands();
        assert_eq!(&commands[..6], &[0xB4, 0x10, 0x01, 0xB5, 0x10, 0x01]);

        let data = interface.data();
        assert_eq!(data.len(), 16 * 16);
        assert_eq!(&data[..16], large_glyph('A').as_slice());
    }

    #[test]
    fn test_line_zero_draws_nothing() {
        let mut display = test_display();
        display.draw_line(0, FontSize::Small, "ignored").unwrap();
        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn test_line_below_panel_draws_nothing() {
        let mut display = test_display();
        display.draw_line(5, FontSize::Large, "A").unwrap();
        assert!(display.release().writes.is_empty());
    }
}
