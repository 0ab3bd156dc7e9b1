//! Colour values for fills.

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Nine-class sequential Greens (ColorBrewer), lightest first.
pub const GREENS_9: [Rgb; 9] = [
    Rgb::new(0xf7, 0xfc, 0xf5),
    Rgb::new(0xe5, 0xf5, 0xe0),
    Rgb::new(0xc7, 0xe9, 0xc0),
    Rgb::new(0xa1, 0xd9, 0x9b),
    Rgb::new(0x74, 0xc4, 0x76),
    Rgb::new(0x41, 0xab, 0x5d),
    Rgb::new(0x23, 0x8b, 0x45),
    Rgb::new(0x00, 0x6d, 0x2c),
    Rgb::new(0x00, 0x44, 0x1b),
];
