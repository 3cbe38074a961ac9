//! Core display operations

use log::{debug, trace, warn};

use crate::addressing::{COLUMNS, PAGES, column_commands, in_bounds, page_command};
use crate::command::{
    CHARGE_PUMP, CHARGE_PUMP_DISABLE, CHARGE_PUMP_ENABLE, DISPLAY_OFF, DISPLAY_ON, INIT_SEQUENCE,
    INVERT_DISPLAY, NORMAL_DISPLAY, SET_HIGH_COLUMN, SET_LOW_COLUMN,
};
use crate::config::Config;
use crate::error::Error;
use crate::interface::DisplayInterface;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Controller lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ControllerState {
    /// Power-up sequence not sent yet
    #[default]
    Uninitialized,
    /// Controller configured and panel on
    Ready,
}

/// Core display driver
///
/// Owns the register interface and issues every controller command. Nothing
/// about the controller is cached between calls: each drawing operation
/// positions the cursor itself before writing.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Bus configuration
    config: Config,
    /// Whether the power-up sequence has been sent
    state: ControllerState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The controller is left untouched until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: ControllerState::Uninitialized,
        }
    }

    /// Send the power-up sequence and blank the screen
    ///
    /// Must run once after the bus comes up. Every other operation assumes it
    /// has completed.
    pub fn init(&mut self) -> DisplayResult<I> {
        if self.state == ControllerState::Ready {
            debug!("re-initializing controller");
        }
        debug!("sending {} byte init sequence", INIT_SEQUENCE.len());
        for command in INIT_SEQUENCE {
            self.send_command(command)?;
        }
        self.state = ControllerState::Ready;

        self.clear()
    }

    /// Write `pattern` to every column of every page
    pub fn fill(&mut self, pattern: u8) -> DisplayResult<I> {
        debug!("fill {pattern:#04x}");
        let row = [pattern; COLUMNS as usize];
        for page in 0..PAGES {
            self.write_page(page, &row)?;
        }
        Ok(())
    }

    /// Blank the whole display RAM
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.fill(0x00)
    }

    /// Write one page row starting at column 0
    ///
    /// `data` may be shorter than a page; the rest of the row keeps its
    /// content.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPosition` if `page` is past the last page and
    /// `Error::PageDataTooLong` if `data` holds more than `COLUMNS` bytes.
    pub fn write_page(&mut self, page: u8, data: &[u8]) -> DisplayResult<I> {
        if page >= PAGES {
            return Err(Error::InvalidPosition { column: 0, page });
        }
        if data.len() > COLUMNS as usize {
            return Err(Error::PageDataTooLong {
                max: COLUMNS as usize,
                provided: data.len(),
            });
        }
        self.warn_if_uninitialized();

        self.start_page(page)?;
        for &byte in data {
            self.send_data(byte)?;
        }
        Ok(())
    }

    /// Move the controller's write pointer to (`column`, `page`)
    ///
    /// `page` is a page index (0-7), not a pixel row.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPosition` if the position lies outside
    /// controller address space.
    pub fn set_cursor(&mut self, column: u8, page: u8) -> DisplayResult<I> {
        if !in_bounds(column, page) {
            return Err(Error::InvalidPosition { column, page });
        }
        trace!("cursor -> column {column}, page {page}");

        self.send_command(page_command(page))?;
        for command in column_commands(column) {
            self.send_command(command)?;
        }
        Ok(())
    }

    /// Switch between inverted and normal polarity
    pub fn set_invert(&mut self, invert: bool) -> DisplayResult<I> {
        self.warn_if_uninitialized();
        debug!("invert: {invert}");
        self.send_command(if invert {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Turn the panel and its charge pump on or off
    pub fn set_power(&mut self, on: bool) -> DisplayResult<I> {
        self.warn_if_uninitialized();
        debug!("power: {on}");
        self.send_command(CHARGE_PUMP)?;
        if on {
            self.send_command(CHARGE_PUMP_ENABLE)?;
            self.send_command(DISPLAY_ON)
        } else {
            self.send_command(CHARGE_PUMP_DISABLE)?;
            self.send_command(DISPLAY_OFF)
        }
    }

    /// Current controller lifecycle state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether [`init`](Self::init) has completed its command sequence
    pub fn is_ready(&self) -> bool {
        self.state == ControllerState::Ready
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and hand back the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Select `page` and reset the column pointer to 0
    fn start_page(&mut self, page: u8) -> DisplayResult<I> {
        self.send_command(page_command(page))?;
        self.send_command(SET_LOW_COLUMN)?;
        self.send_command(SET_HIGH_COLUMN)
    }

    pub(crate) fn warn_if_uninitialized(&self) {
        if self.state == ControllerState::Uninitialized {
            warn!("display used before init()");
        }
    }

    /// Send a command to the display controller
    pub(crate) fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    pub(crate) fn send_data(&mut self, data: u8) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
