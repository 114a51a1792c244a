//! Display colors of labels.
//!
//! Labels in `[-1, 1]` map onto a 31-step palette going from orange
//! (negative) through light gray (neutral) to blue (positive).

use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

/// Formats as `#rrggbb`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const NEUTRAL_INDEX: usize = 15;

const PALETTE: [Rgb; 31] = [
    Rgb::from_hex(0xf59322),
    Rgb::from_hex(0xf4992f),
    Rgb::from_hex(0xf39f3d),
    Rgb::from_hex(0xf2a44a),
    Rgb::from_hex(0xf2aa58),
    Rgb::from_hex(0xf1b065),
    Rgb::from_hex(0xf0b672),
    Rgb::from_hex(0xefbc80),
    Rgb::from_hex(0xeec18d),
    Rgb::from_hex(0xedc79b),
    Rgb::from_hex(0xeccda8),
    Rgb::from_hex(0xebd3b5),
    Rgb::from_hex(0xebd9c3),
    Rgb::from_hex(0xeaded0),
    Rgb::from_hex(0xe9e4de),
    Rgb::from_hex(0xe8eaeb),
    Rgb::from_hex(0xd9e2e8),
    Rgb::from_hex(0xcadbe5),
    Rgb::from_hex(0xbbd3e2),
    Rgb::from_hex(0xaccbdf),
    Rgb::from_hex(0x9dc4dc),
    Rgb::from_hex(0x8ebcd9),
    Rgb::from_hex(0x7fb4d6),
    Rgb::from_hex(0x71add2),
    Rgb::from_hex(0x62a5cf),
    Rgb::from_hex(0x539dcc),
    Rgb::from_hex(0x4496c9),
    Rgb::from_hex(0x358ec6),
    Rgb::from_hex(0x2686c3),
    Rgb::from_hex(0x177fc0),
    Rgb::from_hex(0x0877bd),
];

/// The whole palette, from the most negative to the most positive color.
pub fn palette() -> &'static [Rgb] {
    &PALETTE
}

pub fn negative() -> Rgb {
    PALETTE[0]
}

pub fn neutral() -> Rgb {
    PALETTE[NEUTRAL_INDEX]
}

pub fn positive() -> Rgb {
    PALETTE[PALETTE.len() - 1]
}

/// The palette entry of `label`.
///
/// Labels outside of `[-1, 1]` get the color of the nearest bound.  NaN
/// labels get the negative color.
pub fn color_for_label(label: f64) -> Rgb {
    let last = (PALETTE.len() - 1) as f64;
    let index = f64::floor(15.5 * (label + 1.0)).clamp(0.0, last);
    // NaN casts to 0.
    PALETTE[index as usize]
}
