// SPDX-License-Identifier: MIT
//
// Hex color decoding for token values.
//
// Token sources store colors as `#RRGGBB` strings. Only the six-digit
// form is a valid color token here: shorthand (`#fff`) and alpha
// (`#RRGGBBAA`) forms are rejected rather than guessed at, so a contrast
// rule never runs against a value the platform exporters would read
// differently.

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color decoded from a token value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from 8-bit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Decode a `#RRGGBB` string into an [`Rgb`].
///
/// Surrounding whitespace and a single leading `#` are ignored. Anything
/// other than exactly six hex digits after that returns `None`; this
/// function never panics.
///
/// ```
/// use n_color::hex::{Rgb, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#1a2B3c"), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
/// assert_eq!(hex_to_rgb("#fff"), None);
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s).trim();
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }

    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
