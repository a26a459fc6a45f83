//! ARGB colors used by `yabai` border settings.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An 8-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Color {
    /// Alpha channel (0 = transparent, 255 = opaque).
    pub alpha: u8,
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Creates a color from its alpha, red, green and blue channels.
    #[must_use]
    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self { alpha, red, green, blue }
    }

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self { Self::argb(0xff, red, green, blue) }

    /// Formats the color in `yabai`'s `0xAARRGGBB` notation.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "0x{:02x}{:02x}{:02x}{:02x}",
            self.alpha, self.red, self.green, self.blue
        )
    }
}

impl Default for Color {
    fn default() -> Self { Self::rgb(0, 0, 0) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_hex_color(s) }
}

/// Parses a hex color string.
///
/// Accepts `#RGB`, `#RRGGBB`, `#AARRGGBB` and `0xAARRGGBB`. Colors without an
/// alpha component are fully opaque.
///
/// # Errors
///
/// Returns an error if the string has an unsupported length or contains
/// non-hexadecimal digits.
pub fn parse_hex_color(input: &str) -> Result<Color, String> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid color '{input}': expected hexadecimal digits"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|err| format!("Invalid color '{input}': {err}"))
    };

    match digits.len() {
        3 => {
            let expand = |idx: usize| channel(idx..idx + 1).map(|v| v * 17);
            Ok(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Ok(Color::argb(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => Err(format!(
            "Invalid color '{input}': expected #RGB, #RRGGBB, #AARRGGBB or 0xAARRGGBB"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_is_lowercase_argb() {
        assert_eq!(Color::argb(0xff, 0x77, 0x57, 0x59).to_hex(), "0xff775759");
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex_color("#f80").unwrap(), Color::rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_rrggbb_is_opaque() {
        assert_eq!(parse_hex_color("#b4befe").unwrap(), Color::rgb(0xb4, 0xbe, 0xfe));
    }

    #[test]
    fn test_parse_yabai_notation() {
        let color = parse_hex_color("0xE0808080").unwrap();
        assert_eq!(color, Color::argb(0xe0, 0x80, 0x80, 0x80));
        assert_eq!(color.to_hex(), "0xe0808080");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_from_str_delegates_to_parser() {
        let color: Color = "#000000".parse().unwrap();
        assert_eq!(color, Color::default());
    }
}
