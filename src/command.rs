//! Controller command definitions
//!
//! This module defines the command bytes used to drive the OLED controller.
//! Every byte travels in its own I2C transaction, prefixed by a control byte
//! that selects the command stream ([`CONTROL_COMMAND`]) or the display RAM
//! data stream ([`CONTROL_DATA`]).
//!
//! ## Transaction Structure
//!
//! 1. START
//! 2. Device address (write)
//! 3. Control byte (0x00 = command, 0x40 = data)
//! 4. Payload byte
//! 5. STOP
//!
//! Commands that take an argument (contrast, multiplex ratio, ...) expect the
//! argument as the very next command transaction.
//!
//! ## Example
//!
//! ```rust,no_run
//! use oled_i2c::{command, DisplayInterface, Interface};
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
//! # let mut interface = Interface::new(MockI2c);
//! // Invert the panel
//! let _ = interface.send_command(command::INVERT_DISPLAY);
//!
//! // Write one column of pixels at the current cursor
//! let _ = interface.send_data(0xFF);
//! ```

// Control bytes

/// Control byte announcing a command payload (0x00)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing a display RAM payload (0x40)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Display off command (0xAE)
///
/// Puts the panel to sleep. RAM content is kept.
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
///
/// The charge pump must be enabled before the panel is switched on.
pub const DISPLAY_ON: u8 = 0xAF;

/// Set contrast command (0x81)
///
/// Requires 1 byte: contrast level.
pub const SET_CONTRAST: u8 = 0x81;

/// Normal display command (0xA6)
///
/// A set RAM bit lights the pixel.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display command (0xA7)
///
/// A cleared RAM bit lights the pixel.
pub const INVERT_DISPLAY: u8 = 0xA7;

// Addressing commands

/// Lower column start address base (0x00)
///
/// OR the low nibble of the column into this byte.
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Higher column start address base (0x10)
///
/// OR the high nibble of the column into this byte.
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Page start address base (0xB0)
///
/// Add the page index (0-7) to this byte.
pub const SET_PAGE: u8 = 0xB0;

/// Display start line command (0x40)
///
/// OR the start line (0-63) into this byte.
pub const SET_START_LINE: u8 = 0x40;

// Hardware configuration commands

/// Segment remap command, column 0 mapped to SEG0 (0xA0)
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;

/// COM output scan direction, normal (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 byte: ratio - 1 (0x3F for 64 rows).
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// Set display offset command (0xD3)
///
/// Requires 1 byte: vertical shift in rows.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 byte.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 byte.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 byte.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 byte.
pub const SET_VCOMH: u8 = 0xDB;

// Charge pump

/// Charge pump setting command (0x8D)
///
/// Requires 1 byte: [`CHARGE_PUMP_ENABLE`] or [`CHARGE_PUMP_DISABLE`].
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump argument: enable (0x14)
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Charge pump argument: disable (0x10)
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;

/// Power-up command stream, in transmission order
///
/// Each byte is sent as its own command transaction. The panel family this
/// driver targets only comes up with exactly this stream; do not reorder.
/// [`SET_CONTRAST`] takes the next byte as its level, so `0xA0` lands as the
/// contrast value.
pub const INIT_SEQUENCE: [u8; 23] = [
    DISPLAY_OFF,
    SET_LOW_COLUMN,
    SET_HIGH_COLUMN,
    SET_START_LINE,
    SET_CONTRAST,
    SEGMENT_REMAP_NORMAL,
    COM_SCAN_NORMAL,
    NORMAL_DISPLAY,
    SET_MULTIPLEX_RATIO,
    0x3F, // 1/64 duty
    SET_DISPLAY_OFFSET,
    0x00,
    SET_CLOCK_DIVIDE,
    0x80,
    SET_PRECHARGE,
    0xF1,
    SET_COM_PINS,
    0x12,
    SET_VCOMH,
    0x40,
    CHARGE_PUMP,
    CHARGE_PUMP_ENABLE,
    DISPLAY_ON,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sequence_bytes() {
        assert_eq!(
            INIT_SEQUENCE,
            [
                0xAE, 0x00, 0x10, 0x40, 0x81, 0xA0, 0xC0, 0xA6, 0xA8, 0x3F, 0xD3, 0x00, 0xD5,
                0x80, 0xD9, 0xF1, 0xDA, 0x12, 0xDB, 0x40, 0x8D, 0x14, 0xAF,
            ]
        );
    }

    #[test]
    fn test_init_sequence_powers_panel_last() {
        let n = INIT_SEQUENCE.len();
        assert_eq!(INIT_SEQUENCE[0], DISPLAY_OFF);
        assert_eq!(&INIT_SEQUENCE[n - 3..], &[CHARGE_PUMP, CHARGE_PUMP_ENABLE, DISPLAY_ON]);
    }
}
