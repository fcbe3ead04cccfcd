// SPDX-License-Identifier: MIT
//
// Command-line color input normalization.
//
// The engine only accepts canonical `#RRGGBB`. Users type colors in a few
// other shapes (a bare `RRGGBB` survives shell quoting better, and CSS
// `rgb()` is common), so those are rewritten here before the engine sees
// them. Anything unrecognized is passed through untouched and the engine's
// own `InvalidColorFormat` error reports it.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use swatch_color::Rgb;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("rgb() pattern is valid")
});

/// Rewrite a user-supplied color into `#RRGGBB` form when possible.
///
/// # Errors
///
/// Fails when an `rgb()` channel is above 255.
pub fn normalize(input: &str) -> Result<String> {
    let input = input.trim();

    if let Some(caps) = RGB_FUNCTION.captures(input) {
        let channel = |i: usize| -> Result<u8> {
            let digits = &caps[i];
            digits
                .parse::<u8>()
                .with_context(|| format!("rgb() channel {digits} is out of range 0-255"))
        };
        return Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?).to_hex());
    }

    if input.len() == 6 && input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Ok(format!("#{input}"));
    }

    Ok(input.to_owned())
}
