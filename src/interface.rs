//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the OLED controller over I2C.
//!
//! ## Wire Format
//!
//! Every register write is one complete bus transaction:
//!
//! | Byte | Value |
//! |------|-------|
//! | 1 | device address (7-bit, write) |
//! | 2 | control byte: `0x00` command, `0x40` data |
//! | 3 | payload |
//!
//! The protocol is write-only; nothing is ever read back from the panel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use oled_i2c::{DisplayInterface, Interface};
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
//! // Wrap the bus, targeting the default 0x3C device address
//! let mut interface = Interface::new(MockI2c);
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data
//! let _ = interface.send_data(0xFF);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of the panel
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Trait for the register protocol of the OLED controller
///
/// This trait abstracts over the transport so the
/// [`Display`](crate::display::Display) can be driven by any bus (or by a
/// recording mock in tests).
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this trait
/// yourself if the panel sits behind something other than a plain I2C bus.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command byte to the controller
    ///
    /// The implementation must frame the byte as a command (control byte
    /// `0x00`) and complete the transaction before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a single display RAM byte to the controller
    ///
    /// The implementation must frame the byte as data (control byte `0x40`)
    /// and complete the transaction before returning. The controller advances
    /// its column pointer by one after each data byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error>;
}

/// I2C interface implementation
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus.
/// Bus errors (no acknowledge, arbitration loss, ...) are passed through
/// unchanged and never retried.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
#[derive(Debug)]
pub struct Interface<I2C> {
    /// I2C bus for communication
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface targeting [`DEFAULT_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a new Interface targeting a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the device address this interface writes to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_register(&mut self, control: u8, value: u8) -> InterfaceResult<(), I2C::Error> {
        self.i2c.write(self.address, &[control, value])
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.write_register(CONTROL_COMMAND, command)
    }

    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error> {
        self.write_register(CONTROL_DATA, data)
    }
}

/// Recording doubles shared by the unit tests of every module
#[cfg(test)]
pub(crate) mod mock {
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

    use super::DisplayInterface;

    /// One register write as seen by the controller
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum Write {
        Command(u8),
        Data(u8),
    }

    /// Records every register write; optionally fails after a number of writes
    #[derive(Debug, Default)]
    pub struct RecordingInterface {
        pub writes: Vec<Write>,
        pub fail_after: Option<usize>,
    }

    #[derive(Debug, PartialEq)]
    pub struct BusFault;

    impl RecordingInterface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_after(writes: usize) -> Self {
            Self {
                writes: Vec::new(),
                fail_after: Some(writes),
            }
        }

        pub fn commands(&self) -> Vec<u8> {
            self.writes
                .iter()
                .filter_map(|w| match w {
                    Write::Command(c) => Some(*c),
                    Write::Data(_) => None,
                })
                .collect()
        }

        pub fn data(&self) -> Vec<u8> {
            self.writes
                .iter()
                .filter_map(|w| match w {
                    Write::Data(d) => Some(*d),
                    Write::Command(_) => None,
                })
                .collect()
        }

        fn record(&mut self, write: Write) -> Result<(), BusFault> {
            if self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
                return Err(BusFault);
            }
            self.writes.push(write);
            Ok(())
        }
    }

    impl DisplayInterface for RecordingInterface {
        type Error = BusFault;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.record(Write::Command(command))
        }

        fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
            self.record(Write::Data(data))
        }
    }

    /// I2C bus that records each transaction as (address, bytes written)
    #[derive(Debug, Default)]
    pub struct MockI2c {
        pub transactions: Vec<(u8, Vec<u8>)>,
        pub nack: bool,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.nack {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(buf) = op {
                    bytes.extend_from_slice(buf);
                }
            }
            self.transactions.push((address, bytes));
            Ok(())
        }
    }
}
