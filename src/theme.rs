//! Light and dark color schemes.

use std::fmt;
use std::str::FromStr;

use image::Rgba;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fill of true regions on a light background (`#00c049`).
pub const LIGHT_ACCENT: Rgba<u8> = Rgba([0x00, 0xc0, 0x49, 255]);
/// Fill of true regions on a dark background (`#d4a9f1`).
pub const DARK_ACCENT: Rgba<u8> = Rgba([0xd4, 0xa9, 0xf1, 255]);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Color of circle outlines.
    pub fn stroke(self) -> Rgba<u8> {
        match self {
            Theme::Light => BLACK,
            Theme::Dark => WHITE,
        }
    }

    /// Color of variable labels, same as the outlines.
    pub fn text(self) -> Rgba<u8> {
        self.stroke()
    }

    /// Color of shaded (true) regions.
    pub fn accent(self) -> Rgba<u8> {
        match self {
            Theme::Light => LIGHT_ACCENT,
            Theme::Dark => DARK_ACCENT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}', expected 'light' or 'dark'", other)),
        }
    }
}
