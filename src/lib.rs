//! I2C OLED Text Driver
//!
//! A write-only driver for monochrome OLED controllers with 8 pages of 132
//! columns (SH1106 style, 128 visible), attached over I2C at address 0x3C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Built-in 6x8 and 8x16 ASCII fonts rendered straight into controller RAM
//! - Character-cell and full-line text helpers
//! - `embedded-graphics` integration (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use oled_i2c::{Builder, BusPins, Display, FontSize, Interface};
//! # use core::convert::Infallible;
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
//! let pins = match BusPins::new(4, 5) {
//!     Ok(pins) => pins,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().pins(pins).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let interface = Interface::with_address(i2c, config.address);
//! let mut display = Display::new(interface, config);
//! let _ = display.init();
//!
//! let _ = display.draw_line(1, FontSize::Large, "Hello");
//! let _ = display.draw_at(0, 3, FontSize::Small, "world");
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Page/column addressing utilities
pub mod addressing;
/// Monochrome pixel color
pub mod color;
/// Controller command definitions
pub mod command;
/// Bus configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in glyph tables
pub mod font;
/// Host-facing command surface
pub mod host;
/// Hardware interface abstraction
pub mod interface;
/// Character-cell and line text helpers
pub mod layout;
/// Glyph rendering
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{Builder, BusPins, BusSpeed, Config};
pub use display::{ControllerState, Display};
pub use error::{BuilderError, Error};
pub use font::FontSize;
pub use host::setup;
pub use interface::{DEFAULT_ADDRESS, DisplayInterface, Interface};
pub use layout::line_page;

#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;
