//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Invalid bus configuration, reported before any bus activity
//! - [`Error`] - Runtime errors during display operations
//!
//! Unsupported font sizes and over-long lines are not errors: they render
//! nothing or are truncated.
//!
//! ## Example
//!
//! ```
//! use oled_i2c::{Builder, BusPins, BuilderError};
//!
//! // Missing pins
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingPins)));
//!
//! // Pin 0 is reserved
//! let result = BusPins::new(0, 5);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus error
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    /// The operation that hit it is aborted; later calls re-position the
    /// cursor, so the display recovers on the next successful draw.
    Interface(I::Error),
    /// Invalid bus configuration
    Config(BuilderError),
    /// Cursor position outside controller address space
    ///
    /// Pages run from 0 to 7 and columns from 0 to 131.
    InvalidPosition {
        /// Requested column
        column: u8,
        /// Requested page
        page: u8,
    },
    /// Buffer is too small for the display
    ///
    /// The provided frame buffer must be at least `PAGES * COLUMNS` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Page data longer than one page row
    PageDataTooLong {
        /// Maximum number of bytes per page
        max: usize,
        /// Provided number of bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Bus error: {e:?}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::InvalidPosition { column, page } => {
                write!(f, "Invalid position: column={column}, page={page}")
            }
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::PageDataTooLong { max, provided } => {
                write!(
                    f,
                    "Page data too long: max {max} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<BuilderError> for Error<I> {
    fn from(error: BuilderError) -> Self {
        Self::Config(error)
    }
}

/// Errors that can occur when building configuration
///
/// These errors occur before the display is created and before the bus is
/// touched.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Pins were not specified
    ///
    /// [`Builder::pins()`](crate::config::Builder::pins) must be called before building.
    MissingPins,
    /// A pin is the reserved pin 0
    ///
    /// See [`BusPins::new()`](crate::config::BusPins::new).
    ReservedPin {
        /// The rejected pin
        pin: u8,
    },
    /// Device address does not fit in 7 bits
    InvalidAddress {
        /// The rejected address
        address: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingPins => write!(f, "Pins must be specified"),
            Self::ReservedPin { pin } => write!(f, "Pin {pin} cannot be used for I2C"),
            Self::InvalidAddress { address } => {
                write!(f, "Invalid device address {address:#04x} (max 0x7f)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
