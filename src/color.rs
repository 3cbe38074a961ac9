//! Monochrome pixel color
//!
//! The panel has a single bit per pixel. A set bit lights the pixel in normal
//! polarity and darkens it when the display is inverted.
//!
//! ## Example
//!
//! ```
//! use oled_i2c::Color;
//!
//! assert_eq!(Color::Off.fill_byte(), 0x00);
//! assert_eq!(Color::On.fill_byte(), 0xFF);
//! ```

/// Pixel state
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel lit
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Off,
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::On,
        }
    }
}

impl Color {
    /// RAM byte with all 8 pixels of a column slice in this state
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }

    /// Whether the pixel bit is set
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_bytes() {
        assert_eq!(Color::Off.fill_byte(), 0x00);
        assert_eq!(Color::On.fill_byte(), 0xFF);
    }

    #[test]
    fn test_default_is_off() {
        assert_eq!(Color::default(), Color::Off);
        assert!(!Color::default().is_on());
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn test_from_binary_color() {
        use embedded_graphics_core::pixelcolor::BinaryColor;
        assert_eq!(Color::from(BinaryColor::On), Color::On);
        assert_eq!(Color::from(BinaryColor::Off), Color::Off);
    }
}
