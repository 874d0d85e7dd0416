use std::fmt;
use std::str::FromStr;

use crate::error::{SymbolError, TacError};

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Packed `0xRRGGBB` value, ignoring alpha.
    #[must_use]
    pub fn rgb_value(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Parses `RRGGBB` or `AARRGGBB`, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns `SymbolError::InvalidColor` for any other form.
    pub fn from_hex(hex: &str) -> Result<Self, SymbolError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || SymbolError::InvalidColor(hex.to_owned());
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        let [b3, b2, b1, b0] = value.to_be_bytes();
        match digits.len() {
            6 => Ok(Self::rgb(b2, b1, b0)),
            8 => Ok(Self {
                r: b2,
                g: b1,
                b: b0,
                a: b3,
            }),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Color {
    type Err = TacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_hex(s)?)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_argb() {
        assert_eq!(Color::from_hex("FF0000").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("#0000ff").unwrap(), Color::BLUE);
        let c = Color::from_hex("80FFFF00").unwrap();
        assert_eq!((c.a, c.r, c.g, c.b), (0x80, 255, 255, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::from_hex("red").is_err());
        assert!(Color::from_hex("FFF").is_err());
        assert!("12345G".parse::<Color>().is_err());
    }

    #[test]
    fn black_with_alpha_has_zero_rgb() {
        let c = Color::from_hex("40000000").unwrap();
        assert_eq!(c.rgb_value(), 0);
        assert_eq!(Color::GRAY.to_string(), "#808080");
    }
}
