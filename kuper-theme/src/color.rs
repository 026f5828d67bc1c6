//! Packed `0xAARRGGBB` colors and their hex serialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ThemeError, ThemeResult};

/// A color packed as `0xAARRGGBB`, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Fully opaque black. AMOLED surfaces use exactly this value.
    pub const PURE_BLACK: Argb = Argb(0xFF00_0000);
    /// Fully opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Create a color from its packed value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb8(0xFF, r, g, b)
    }

    /// Create a color from 8-bit channels including alpha.
    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// The packed value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Whether the alpha channel is `0xFF`.
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Perceived brightness, `(299 R + 587 G + 114 B) / 1000`, in `0..=255`.
    pub const fn luma(self) -> u32 {
        (self.red() as u32 * 299 + self.green() as u32 * 587 + self.blue() as u32 * 114) / 1000
    }

    /// Format as `#rrggbb` when opaque, `#aarrggbb` otherwise.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:06x}", self.0 & 0x00FF_FFFF)
        } else {
            format!("#{:08x}", self.0)
        }
    }

    /// Parse `#rrggbb` (opaque) or `#aarrggbb`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> ThemeResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ThemeError::invalid_color(hex, "non-hex digit"));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ThemeError::invalid_color(hex, "invalid hex color"))?;
        match digits.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(ThemeError::invalid_color(
                hex,
                "hex color must be 6 or 8 characters",
            )),
        }
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Argb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Argb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let color = Argb(0x80_12_34_56);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
        assert!(!color.is_opaque());
        assert_eq!(Argb::from_argb8(0x80, 0x12, 0x34, 0x56), color);
    }

    #[test]
    fn test_luma() {
        assert_eq!(Argb::PURE_BLACK.luma(), 0);
        assert_eq!(Argb::WHITE.luma(), 255);
        // (299*0xFE + 587*0xF7 + 114*0xFF) / 1000
        assert_eq!(Argb(0xFFFEF7FF).luma(), 250);
    }

    #[test]
    fn test_hex_formats() {
        assert_eq!(Argb(0xFF6750A4).to_hex(), "#6750a4");
        assert_eq!(Argb(0x806750A4).to_hex(), "#806750a4");
        assert_eq!(Argb::from_hex("#6750A4").unwrap(), Argb(0xFF6750A4));
        assert_eq!(Argb::from_hex("806750a4").unwrap(), Argb(0x806750A4));
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(Argb::from_hex("#12345").is_err());
        assert!(Argb::from_hex("#zzzzzz").is_err());
        assert!(Argb::from_hex("+12345").is_err());
        assert!(Argb::from_hex("").is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Argb(0xFF1D1B20)).unwrap();
        assert_eq!(json, "\"#1d1b20\"");
        let back: Argb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Argb(0xFF1D1B20));
    }
}
