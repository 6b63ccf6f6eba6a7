//! Shared color palette

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{0}' (expected #rrggbb)")]
    InvalidHex(String),
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.is_ascii())
            .ok_or_else(|| ColorError::InvalidHex(trimmed.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorError::InvalidHex(trimmed.to_string()))
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Ordered, non-empty color sequence indexed with wraparound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub const DEFAULT_HEX: [&'static str; 5] =
        ["#3498db", "#f39c12", "#e74c3c", "#9b59b6", "#34495e"];

    pub fn new(colors: Vec<Rgb>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn from_hex<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ColorError> {
        let colors = tokens
            .iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<Rgb>, _>>()?;
        Self::new(colors)
    }

    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Rgb(0x34, 0x98, 0xdb),
                Rgb(0xf3, 0x9c, 0x12),
                Rgb(0xe7, 0x4c, 0x3c),
                Rgb(0x9b, 0x59, 0xb6),
                Rgb(0x34, 0x49, 0x5e),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_hex_tokens() {
        let parsed = Palette::from_hex(&Palette::DEFAULT_HEX).unwrap();
        assert_eq!(parsed, Palette::default());
        assert_eq!(Palette::default().color(0).to_string(), "#3498db");
    }

    #[test]
    fn test_color_wraps_around() {
        let palette = Palette::default();
        let len = palette.len();
        for i in 0..len * 3 {
            assert_eq!(palette.color(i), palette.colors()[i % len]);
        }
        assert_eq!(palette.color(5), palette.color(0));
        assert_eq!(palette.color(7), palette.color(2));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!("3498db".parse::<Rgb>().is_err());
        assert!("#34zzdb".parse::<Rgb>().is_err());
        assert!("#3498d".parse::<Rgb>().is_err());
        assert_eq!(Palette::new(Vec::new()), Err(ColorError::EmptyPalette));
    }

    #[test]
    fn test_serializes_as_hex() {
        let json = serde_json::to_string(&Rgb(0xe7, 0x4c, 0x3c)).unwrap();
        assert_eq!(json, "\"#e74c3c\"");
    }
}
