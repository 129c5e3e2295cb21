//! Color representation and parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
///
/// Serializes as a CSS hex string so themes read naturally in YAML and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let base = Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                Ok(Self::new(
                    base.r,
                    base.g,
                    base.b,
                    f32::from(channel(6..8)?) / 255.0,
                ))
            }
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Parse a CSS color: a hex string or one of the named colors
    /// `white`, `black`, `gray`/`grey` and `transparent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is neither valid hex nor a known name.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::BLACK),
            "gray" | "grey" => Ok(Self::GRAY),
            "transparent" => Ok(Self::TRANSPARENT),
            _ if value.starts_with('#') || value.chars().all(|c| c.is_ascii_hexdigit()) => {
                Self::from_hex(value)
            }
            _ => Err(ColorParseError::UnknownName(value.to_string())),
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Convert to hex string with alpha.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        format!(
            "{}{:02x}",
            self.to_hex(),
            (self.a * 255.0).round() as u8
        )
    }

    /// CSS text for this color; alpha is only written when not opaque.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            self.to_hex()
        } else {
            self.to_hex_with_alpha()
        }
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// CSS `gray` (#808080)
    pub const GRAY: Self = Self {
        r: 128.0 / 255.0,
        g: 128.0 / 255.0,
        b: 128.0 / 255.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 6 or 8)")]
    InvalidLength,
    /// Not a hex string and not a known color name
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}
