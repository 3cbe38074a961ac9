//! Host-facing command surface
//!
//! Thin entry points for callers that pass plain integers, such as a
//! scripting binding or a serial command shell. Sizes are `1` (small) or `2`
//! (large); any other size draws nothing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use oled_i2c::setup;
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
//! let mut bus = MockI2c;
//!
//! // Pass `&mut bus` to keep the bus if configuration is rejected
//! let mut oled = match setup(&mut bus, 4, 5) {
//!     Ok(oled) => oled,
//!     Err(_) => return,
//! };
//!
//! let _ = oled.line(1, 2, "Status");
//! let _ = oled.print(0, 3, 1, "temp 21.5C");
//! let _ = oled.invert(1);
//! ```

use embedded_hal::i2c::I2c;
use log::{debug, info};

use crate::config::{Builder, BusPins};
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::font::FontSize;
use crate::interface::{DisplayInterface, Interface};

/// Validate the bus pins, bind the bus and initialize the panel
///
/// `sda` and `scl` are checked before the bus is touched. The bus itself must
/// already be configured for those pins; embedded-hal leaves pin routing to
/// the HAL that created it.
///
/// # Errors
///
/// Returns [`Error::Config`] for a reserved pin and [`Error::Interface`] if
/// the init sequence is not acknowledged.
pub fn setup<I2C>(
    i2c: I2C,
    sda: u8,
    scl: u8,
) -> Result<Display<Interface<I2C>>, Error<Interface<I2C>>>
where
    I2C: I2c,
{
    let pins = BusPins::new(sda, scl)?;
    let config = Builder::new().pins(pins).build()?;
    info!(
        "oled at {:#04x} on sda={} scl={}",
        config.address, pins.sda, pins.scl
    );

    let interface = Interface::with_address(i2c, config.address);
    let mut display = Display::new(interface, config);
    display.init()?;
    Ok(display)
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw `text` at character cell `x` on page `y` with a numeric size
    pub fn print(&mut self, x: u8, y: u8, size: u8, text: &str) -> DisplayResult<I> {
        match FontSize::from_raw(size) {
            Some(size) => self.draw_at(x, y, size, text),
            None => {
                debug!("unsupported text size {size}, nothing drawn");
                Ok(())
            }
        }
    }

    /// Replace text line `line` (from 1) with a numeric size
    pub fn line(&mut self, line: u8, size: u8, text: &str) -> DisplayResult<I> {
        match FontSize::from_raw(size) {
            Some(size) => self.draw_line(line, size, text),
            None => {
                debug!("unsupported text size {size}, nothing drawn");
                Ok(())
            }
        }
    }

    /// Invert the display when `flag` is 1, restore normal polarity otherwise
    pub fn invert(&mut self, flag: u8) -> DisplayResult<I> {
        self.set_invert(flag == 1)
    }
}
