//! 24-bit colors as used by embeds and roles.
//!
//! Discord's API takes colors as a decimal integer, while people usually have
//! a `#RRGGBB` hex code. [`Color`] converts between the two.

use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// An RGB color packed as `0xRRGGBB`.
///
/// ```
/// use cordkit::Color;
///
/// let blurple: Color = "#5865F2".parse().unwrap();
/// assert_eq!(blurple.to_decimal(), 5793266);
/// assert_eq!(blurple.to_string(), "#5865F2");
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
    rgb: u32,
}

impl Color {
    /// Largest representable value, `#FFFFFF`.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Discord's main brand color, also the default embed color.
    pub const BLURPLE: Self = Self::from_rgb(0x58_65F2);

    /// Wraps `rgb`, dropping anything above the low 24 bits.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self { rgb: rgb & Self::MAX }
    }

    /// The decimal integer Discord's API expects.
    pub const fn to_decimal(self) -> u32 {
        self.rgb
    }

    /// The `RR` channel.
    pub const fn red(self) -> u8 {
        (self.rgb >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.rgb >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.rgb as u8
    }

    /// Parses `#RRGGBB` or `RRGGBB`, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColor`] for anything but exactly six hex digits after
    /// the optional `#`.
    pub fn parse_hex(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor {
                input: input.to_string(),
            });
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_rgb)
            .map_err(|_| Error::InvalidColor {
                input: input.to_string(),
            })
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_decimal()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.rgb)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self} = {})", self.rgb)
    }
}

/// A named color from Discord's brand palette.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BrandColor {
    pub name: &'static str,
    pub color: Color,
    pub description: &'static str,
}

/// Discord's brand colors.
pub static BRAND_COLORS: &[BrandColor] = &[
    BrandColor {
        name: "Blurple",
        color: Color::BLURPLE,
        description: "Main brand color",
    },
    BrandColor {
        name: "Green",
        color: Color::from_rgb(0x57_F287),
        description: "Online status / Success",
    },
    BrandColor {
        name: "Yellow",
        color: Color::from_rgb(0xFE_E75C),
        description: "Idle status / Warning",
    },
    BrandColor {
        name: "Fuchsia",
        color: Color::from_rgb(0xEB_459E),
        description: "Nitro / Boosting",
    },
    BrandColor {
        name: "Red",
        color: Color::from_rgb(0xED_4245),
        description: "DND status / Danger",
    },
    BrandColor {
        name: "Black",
        color: Color::from_rgb(0x23_272A),
        description: "Old dark theme background",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_decimal() {
        assert_eq!(Color::parse_hex("#5865F2").unwrap().to_decimal(), 5_793_266);
        assert_eq!(Color::parse_hex("5865f2").unwrap(), Color::BLURPLE);
        assert_eq!(Color::parse_hex("#000000").unwrap().to_decimal(), 0);
        assert_eq!(Color::parse_hex("#FFFFFF").unwrap().to_decimal(), Color::MAX);
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12345", "#1234567", "#GGGGGG", "##5865F2", "+58 65F", "#５８６５Ｆ２"] {
            assert_eq!(
                Color::parse_hex(bad),
                Err(Error::InvalidColor { input: bad.into() }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn displays_uppercase_hex() {
        assert_eq!(Color::from_rgb(0x0a0b0c).to_string(), "#0A0B0C");
        assert_eq!(Color::from_rgb(0xFF00_0000).to_hex(), "#000000");
    }

    #[test]
    fn channels() {
        let c = Color::BLURPLE;
        assert_eq!((c.red(), c.green(), c.blue()), (0x58, 0x65, 0xF2));
    }

    #[test]
    fn palette_round_trips_through_hex() {
        assert_eq!(BRAND_COLORS.len(), 6);
        for brand in BRAND_COLORS {
            assert_eq!(Color::parse_hex(&brand.color.to_hex()).unwrap(), brand.color);
        }
        assert_eq!(BRAND_COLORS[4].color.to_string(), "#ED4245");
    }
}
