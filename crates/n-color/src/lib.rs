// SPDX-License-Identifier: MIT
//
// n-color: WCAG color math for n-tokens.
//
// Everything a contrast rule needs and nothing more: decode a `#RRGGBB`
// token value, linearize it with the WCAG 2.x sRGB transfer function,
// and compare two luminances. The formulas follow the WCAG definition
// literally (breakpoint 0.03928, exponent 2.4) because the thresholds
// they are compared against are exact.

pub mod contrast;
pub mod hex;

pub use contrast::{contrast_ratio, relative_luminance};
pub use hex::{Rgb, hex_to_rgb};
