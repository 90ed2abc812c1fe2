// File: crates/diamond-core/src/color.rs
// Summary: ARGB color value with hex (de)serialization, plus the application palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

/// 8-bit ARGB color. Serialized as `"#AARRGGBB"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { a, r, g, b } }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self { Self::from_argb(255, r, g, b) }

    pub const fn with_alpha(self, a: u8) -> Self { Self { a, ..self } }

    /// Scale the color channels by `factor`, keeping alpha.
    pub fn darken_by(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let ch = |v: u8| (f64::from(v) * f) as u8;
        Self { a: self.a, r: ch(self.r), g: ch(self.g), b: ch(self.b) }
    }

    /// Half-brightness variant used for outlines and labels.
    pub fn darken(self) -> Self { self.darken_by(0.5) }

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`; the leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ColorParseError::InvalidDigit(s.to_string()));
        match hex.len() {
            6 => Ok(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_hex(s) }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Fixed application colors.
pub struct Palette;

impl Palette {
    pub const LIGHTEST: Color = Color::from_rgb(0xDF, 0xD0, 0xB8);
    pub const LIGHT: Color = Color::from_rgb(0x94, 0x89, 0x79);
    pub const DARK: Color = Color::from_rgb(0x39, 0x3E, 0x46);
    pub const DARKEST: Color = Color::from_rgb(0x22, 0x28, 0x31);
    pub const WHITE: Color = Color::from_rgb(0xFF, 0xFF, 0xFF);
    /// Backdrop behind the whole canvas.
    pub const CANVAS: Color = Color::from_rgb(0xF0, 0xF0, 0xF0);
    pub const SCALE: Color = Color::from_rgb(0x00, 0x00, 0x00);
    pub const DEBUG: Color = Color::from_rgb(0xFF, 0x00, 0xFF);
}
