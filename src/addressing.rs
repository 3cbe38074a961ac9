//! Page/column addressing utilities
//!
//! The controller organises its RAM as 8 horizontal pages of 132 columns.
//! Each RAM byte is one column slice of a page: bit 0 is the top pixel row of
//! the page, bit 7 the bottom one.
//!
//! ```text
//!          column 0   column 1        column 131
//! page 0   [b0..b7]   [b0..b7]   ...  [b0..b7]    rows 0-7
//! page 1   [b0..b7]   [b0..b7]   ...  [b0..b7]    rows 8-15
//!   ...
//! page 7   [b0..b7]   [b0..b7]   ...  [b0..b7]    rows 56-63
//! ```
//!
//! ## Example
//!
//! ```
//! use oled_i2c::addressing::{column_commands, page_command, pixel_offset};
//!
//! assert_eq!(page_command(3), 0xB3);
//! assert_eq!(column_commands(0x2A), [0x12, 0x0B]);
//!
//! // Pixel (5, 10) lives in page 1, column 5, bit 2
//! assert_eq!(pixel_offset(5, 10), (132 + 5, 0x04));
//! ```

use crate::command::{SET_HIGH_COLUMN, SET_PAGE};

/// Number of pages (8 pixel rows each)
pub const PAGES: u8 = 8;

/// Number of columns in controller space, including the non-visible ones
pub const COLUMNS: u8 = 132;

/// Height of the panel in pixels
pub const HEIGHT: u32 = PAGES as u32 * 8;

/// Width of controller RAM in pixels
pub const WIDTH: u32 = COLUMNS as u32;

/// Size in bytes of a page-organised frame buffer
pub const BUFFER_SIZE: usize = PAGES as usize * COLUMNS as usize;

/// Bit OR-ed into every low column nibble command
///
/// Even columns are therefore addressed as the odd column to their right.
pub const LOW_COLUMN_BIT: u8 = 0x01;

/// Page select command for `page`
pub fn page_command(page: u8) -> u8 {
    SET_PAGE + page
}

/// Column address commands for `column`, in transmission order
///
/// Returns `[high nibble command, low nibble command]`.
pub fn column_commands(column: u8) -> [u8; 2] {
    [
        SET_HIGH_COLUMN | (column >> 4),
        LOW_COLUMN_BIT | (column & 0x0F),
    ]
}

/// Whether (`column`, `page`) lies inside controller address space
pub fn in_bounds(column: u8, page: u8) -> bool {
    page < PAGES && column < COLUMNS
}

/// Buffer index and bit mask of pixel (`x`, `y`) in a page-organised buffer
///
/// The caller must keep `x < WIDTH` and `y < HEIGHT`.
pub fn pixel_offset(x: u32, y: u32) -> (usize, u8) {
    let page = y / 8;
    let index = (page * WIDTH + x) as usize;
    let bit = 0x01 << (y % 8);
    (index, bit)
}
