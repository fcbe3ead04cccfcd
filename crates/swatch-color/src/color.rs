// SPDX-License-Identifier: MIT
//
// Rgb, Hsl and the three-view Color record.
//
// HSL here is the display-grade integer form: hue in whole degrees [0, 360),
// saturation and lightness in whole percents [0, 100]. RGB → HSL rounds each
// field to the nearest integer, so RGB → HSL → RGB is not lossless, but
// HSL → RGB never leaves the byte range.
//
// Conversion pipeline:
//
//   "#RRGGBB" → Rgb → Hsl → (harmony math) → Hsl → Rgb → "#RRGGBB"

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::hex::{hex_to_rgb, rgb_to_hex};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit-per-channel sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to integer HSL.
    #[inline]
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Format as `#RRGGBB`.
    #[inline]
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Whether light text reads better than dark text on top of this color.
    ///
    /// Uses the classic perceived-brightness weights (0.299, 0.587, 0.114).
    #[must_use]
    pub fn is_dark(self) -> bool {
        let brightness =
            0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        brightness < 127.5
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Integer HSL: hue in degrees `[0, 360)`, saturation and lightness in
/// percent `[0, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Build an HSL value, wrapping hue into `[0, 360)` and capping
    /// saturation and lightness at 100.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Convert to 8-bit RGB.
    #[inline]
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}%, {}%", self.h, self.s, self.l)
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// One color seen three ways: hex string, RGB channels and integer HSL.
///
/// Built once and never mutated. `hex` and `rgb` always agree exactly;
/// `rgb` is always `hsl_to_rgb(hsl)` for colors built with
/// [`from_hsl`](Self::from_hsl).
///
/// ```
/// use swatch_color::{Color, Hsl, Rgb};
///
/// let red = Color::from_hex("#FF0000").unwrap();
/// assert_eq!(red.rgb(), Rgb::new(255, 0, 0));
/// assert_eq!(red.hsl(), Hsl::new(0, 100, 50));
///
/// let cyan = Color::from_hsl(Hsl::new(180, 100, 50));
/// assert_eq!(cyan.hex(), "#00FFFF");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
}

impl Color {
    /// Build from HSL: the RGB and hex views are derived from it.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let hsl = Hsl::new(hsl.h, hsl.s, hsl.l);
        let rgb = hsl_to_rgb(hsl);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl,
        }
    }

    /// Build from RGB: the HSL view is the rounded conversion.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
        }
    }

    /// Parse a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for malformed input.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex_to_rgb(hex).map(Self::from_rgb)
    }

    /// The `#RRGGBB` form, uppercase.
    #[inline]
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[inline]
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Convert RGB to integer HSL with the min/max-channel method.
///
/// Hue is 0 for achromatic colors. A hue that rounds up to 360 wraps to 0.
#[must_use]
#[allow(clippy::float_cmp)] // `max` is always bitwise one of the channels.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut h = if max == min {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * (2.0 + (b - r) / delta)
    } else {
        60.0 * (4.0 + (r - g) / delta)
    };
    if h < 0.0 {
        h += 360.0;
    }

    let l = (min + max) / 2.0;
    let s = if max == 0.0 || min == 1.0 {
        0.0
    } else {
        (max - l) / l.min(1.0 - l)
    };

    let hue = h.round().clamp(0.0, 360.0) as u16;
    Hsl {
        h: if hue >= 360 { hue - 360 } else { hue },
        s: to_percent(s),
        l: to_percent(l),
    }
}

/// Convert integer HSL to RGB via chroma, intermediate and match values.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let hue = hsl.h % 360;
    let h = f64::from(hue);
    let s = f64::from(hsl.s.min(100)) / 100.0;
    let l = f64::from(hsl.l.min(100)) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match hue / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// A unit fraction as a rounded whole percent.
#[inline]
fn to_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

/// A unit fraction as a rounded 8-bit channel.
#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
