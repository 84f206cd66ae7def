//! WCAG 2.x relative luminance and contrast ratio.
//!
//! These are the formulas contrast rules are judged by, so they are kept
//! byte-for-byte faithful to the WCAG definition:
//!
//! - sRGB linearization breakpoint `0.03928`, exponent `2.4`
//! - luminance weights `0.2126 R + 0.7152 G + 0.0722 B`, summed left to right
//! - ratio `(L_lighter + 0.05) / (L_darker + 0.05)`, in `[1.0, 21.0]`
//!
//! No fused multiply-add: a ratio that lands exactly on a threshold (4.5)
//! must compare the same way every other WCAG checker computes it.

use crate::hex::{Rgb, hex_to_rgb};

/// Convert one 0.0–1.0 sRGB channel to linear light (WCAG 2.x transfer).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, 0.0 for black through 1.0 for white.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two decoded colors. Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two `#RRGGBB` strings.
///
/// Returns `None` if either string is not a six-digit hex color.
#[must_use]
pub fn contrast_ratio(fg: &str, bg: &str) -> Option<f64> {
    let fg = hex_to_rgb(fg)?;
    let bg = hex_to_rgb(bg)?;
    Some(contrast_ratio_rgb(fg, bg))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
