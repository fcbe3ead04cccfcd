//! Result assembly, from a base color and a harmony to five full colors.
//!
//! [`compute_harmony`] is the single entry point for hex input. It parses the
//! base, converts it to HSL once, runs the harmony rule, and converts each
//! of the five HSL slots back to RGB and hex independently.

use std::slice;

use swatch_color::{Color, ColorError, Hsl, Rgb, hex_to_rgb, rgb_to_hsl};
use tracing::{debug, trace};

use crate::harmony::{HARMONY_SIZE, Harmony};
use crate::random::{Xorshift32, random_rgb};

// ---------------------------------------------------------------------------
// HarmonyResult
// ---------------------------------------------------------------------------

/// Exactly five colors: four derived, then the base.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HarmonyResult {
    harmony: Harmony,
    colors: [Color; HARMONY_SIZE],
}

impl HarmonyResult {
    /// The rule that produced these colors.
    #[must_use]
    pub const fn harmony(&self) -> Harmony {
        self.harmony
    }

    /// All five colors in display order.
    #[must_use]
    pub const fn colors(&self) -> &[Color; HARMONY_SIZE] {
        &self.colors
    }

    /// The base color (always the last slot).
    #[must_use]
    pub const fn base(&self) -> &Color {
        &self.colors[HARMONY_SIZE - 1]
    }

    /// The four derived colors.
    #[must_use]
    pub fn derived(&self) -> &[Color] {
        &self.colors[..HARMONY_SIZE - 1]
    }

    pub fn iter(&self) -> slice::Iter<'_, Color> {
        self.colors.iter()
    }

    #[must_use]
    pub fn into_array(self) -> [Color; HARMONY_SIZE] {
        self.colors
    }
}

impl<'a> IntoIterator for &'a HarmonyResult {
    type Item = &'a Color;
    type IntoIter = slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Compute the five-color palette for a `#RRGGBB` base color.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `base_hex` is not a
/// well-formed 7-character hex color.
pub fn compute_harmony(base_hex: &str, harmony: Harmony) -> Result<HarmonyResult, ColorError> {
    let rgb = hex_to_rgb(base_hex)?;
    Ok(harmonize(rgb_to_hsl(rgb), harmony))
}

/// Compute the five-color palette for a base color already in HSL.
#[must_use]
pub fn harmonize(base: Hsl, harmony: Harmony) -> HarmonyResult {
    debug!(harmony = harmony.name(), base = %base, "computing palette");

    let colors = harmony.generate(base).map(Color::from_hsl);
    for (slot, color) in colors.iter().enumerate() {
        trace!(slot, hex = color.hex(), hsl = %color.hsl(), "assembled color");
    }

    HarmonyResult { harmony, colors }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The caller-owned selection: a base color and a harmony.
///
/// Every change produces a new `Palette`; recomputation always starts from
/// scratch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Palette {
    pub color: Rgb,
    pub harmony: Harmony,
}

impl Palette {
    #[must_use]
    pub const fn new(color: Rgb, harmony: Harmony) -> Self {
        Self { color, harmony }
    }

    /// Build a palette from a `#RRGGBB` base color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for malformed hex.
    pub fn from_hex(hex: &str, harmony: Harmony) -> Result<Self, ColorError> {
        Ok(Self::new(hex_to_rgb(hex)?, harmony))
    }

    /// A palette around a randomly drawn base color.
    #[must_use]
    pub fn random(seed: u32, harmony: Harmony) -> Self {
        let color = random_rgb(&mut Xorshift32::new(seed));
        debug!(seed, color = %color.to_hex(), "picked random base color");
        Self::new(color, harmony)
    }

    /// The same harmony around a different base color.
    #[must_use]
    pub const fn with_color(self, color: Rgb) -> Self {
        Self { color, ..self }
    }

    /// The same base color under a different harmony.
    #[must_use]
    pub const fn with_harmony(self, harmony: Harmony) -> Self {
        Self { harmony, ..self }
    }

    /// The base color as `#RRGGBB`.
    #[must_use]
    pub fn base_hex(&self) -> String {
        self.color.to_hex()
    }

    /// Run the selected harmony over the base color.
    #[must_use]
    pub fn compute(&self) -> HarmonyResult {
        harmonize(rgb_to_hsl(self.color), self.harmony)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
