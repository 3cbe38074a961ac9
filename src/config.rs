//! Bus configuration types and builder

pub use crate::error::BuilderError;
use crate::interface::DEFAULT_ADDRESS;

/// Pin identifier that can never carry the bus
///
/// Pin 0 is shared with a fixed system function on the boards this driver
/// targets, so it is rejected for both SDA and SCL.
pub const RESERVED_PIN: u8 = 0;

/// Highest valid 7-bit I2C address
pub const MAX_ADDRESS: u8 = 0x7F;

/// The two pins carrying the bus
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BusPins {
    /// Data line pin
    pub sda: u8,
    /// Clock line pin
    pub scl: u8,
}

impl BusPins {
    /// Create a new pin pair with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::ReservedPin` if either pin is [`RESERVED_PIN`].
    pub fn new(sda: u8, scl: u8) -> Result<Self, BuilderError> {
        if sda == RESERVED_PIN {
            return Err(BuilderError::ReservedPin { pin: sda });
        }
        if scl == RESERVED_PIN {
            return Err(BuilderError::ReservedPin { pin: scl });
        }
        Ok(Self { sda, scl })
    }
}

/// Bus clock speed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BusSpeed {
    /// Standard mode, 100 kHz
    #[default]
    Slow,
    /// Fast mode, 400 kHz
    Fast,
}

impl BusSpeed {
    /// Clock frequency in Hz
    pub fn frequency_hz(self) -> u32 {
        match self {
            Self::Slow => 100_000,
            Self::Fast => 400_000,
        }
    }
}

/// Bus configuration
///
/// Holds everything needed to bring the bus up and reach the panel.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 7-bit device address of the panel
    pub address: u8,
    /// SDA/SCL pin pair
    pub pins: BusPins,
    /// Bus clock speed
    pub speed: BusSpeed,
}

/// Builder for constructing bus configuration
///
/// # Example
///
/// ```rust,no_run
/// use oled_i2c::{Builder, BusPins, BusSpeed};
///
/// let pins = match BusPins::new(4, 5) {
///     Ok(pins) => pins,
///     Err(_) => return,
/// };
/// let config = match Builder::new().pins(pins).speed(BusSpeed::Slow).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x3C);
/// ```
#[must_use]
pub struct Builder {
    /// SDA/SCL pin pair (required)
    pins: Option<BusPins>,
    /// 7-bit device address
    address: u8,
    /// Bus clock speed
    speed: BusSpeed,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            pins: None,
            address: DEFAULT_ADDRESS,
            speed: BusSpeed::Slow,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bus pins (required)
    pub fn pins(mut self, pins: BusPins) -> Self {
        self.pins = Some(pins);
        self
    }

    /// Set the device address
    ///
    /// Defaults to [`DEFAULT_ADDRESS`] (0x3C).
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the bus clock speed
    pub fn speed(mut self, speed: BusSpeed) -> Self {
        self.speed = speed;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingPins` if pins were not set and
    /// `BuilderError::InvalidAddress` if the address does not fit in 7 bits.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.address > MAX_ADDRESS {
            return Err(BuilderError::InvalidAddress {
                address: self.address,
            });
        }
        Ok(Config {
            address: self.address,
            pins: self.pins.ok_or(BuilderError::MissingPins)?,
            speed: self.speed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_sda_rejected() {
        let result = BusPins::new(0, 5);
        assert!(matches!(result, Err(BuilderError::ReservedPin { pin: 0 })));
    }

    #[test]
    fn test_reserved_scl_rejected() {
        let result = BusPins::new(4, 0);
        assert!(matches!(result, Err(BuilderError::ReservedPin { pin: 0 })));
    }

    #[test]
    fn test_valid_pins() {
        let pins = BusPins::new(4, 5).unwrap();
        assert_eq!(pins, BusPins { sda: 4, scl: 5 });
    }

    #[test]
    fn test_builder_requires_pins() {
        let result = Builder::new().build();
        assert!(matches!(result, Err(BuilderError::MissingPins)));
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new()
            .pins(BusPins::new(4, 5).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.speed, BusSpeed::Slow);
        assert_eq!(config.speed.frequency_hz(), 100_000);
    }

    #[test]
    fn test_builder_rejects_eight_bit_address() {
        let result = Builder::new()
            .pins(BusPins::new(4, 5).unwrap())
            .address(0x78)
            .build();
        assert!(result.is_ok());

        let result = Builder::new()
            .pins(BusPins::new(4, 5).unwrap())
            .address(0x80)
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidAddress { address: 0x80 })
        ));
    }

    #[test]
    fn test_fast_speed() {
        assert_eq!(BusSpeed::Fast.frequency_hz(), 400_000);
    }
}
