// SPDX-License-Identifier: MIT
//
// `#RRGGBB` parsing and formatting.
//
// Only the 7-character form is accepted: a `#` followed by exactly six hex
// digits, upper or lower case. Output always uses uppercase digits.

use crate::color::Rgb;
use crate::error::{ColorError, FormatIssue};

/// Parse a `#RRGGBB` string into its three channels.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if the `#` is missing, there
/// are not exactly six digits after it, or any of them is not a hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ColorError::invalid(hex, FormatIssue::MissingHash))?;

    let len = digits.chars().count();
    if len != 6 {
        return Err(ColorError::invalid(hex, FormatIssue::Length(len)));
    }

    let mut channels = [0u8; 3];
    for (i, c) in digits.chars().enumerate() {
        let nibble = hex_digit(c).ok_or_else(|| ColorError::invalid(hex, FormatIssue::Digit(c)))?;
        channels[i / 2] = (channels[i / 2] << 4) | nibble;
    }

    let [r, g, b] = channels;
    Ok(Rgb::new(r, g, b))
}

/// Format a color as `#RRGGBB` with uppercase digits.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let Rgb { r, g, b } = rgb;
    format!("#{r:02X}{g:02X}{b:02X}")
}

#[inline]
fn hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}
