//! The six harmony rules.
//!
//! Each rule takes a base [`Hsl`] and produces four derived colors from a
//! fixed set of offsets. The base is appended as the fifth slot, so display
//! slot 5 is always the color the user picked.

use std::fmt;
use std::str::FromStr;

use swatch_color::Hsl;

use crate::shift;

/// A named rule for deriving four related colors from a base color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "&'static str", try_from = "String")
)]
pub enum Harmony {
    /// Hue steps of +20, +40, +60, +80 degrees.
    #[default]
    Analogous,
    /// Saturation steps of 10..40, reflected below 100.
    Monochromatic,
    /// Hue +120/+240 with lightness lifted by 0, 10, 20.
    Triad,
    /// The complement (+180) and the base hue, each with lighter variants.
    Complementary,
    /// Two complements plus two analogous neighbours (+30, +60).
    Compound,
    /// Lightness steps of 10..40, wrapping past 100.
    Shades,
}

/// Number of colors every harmony produces, base included.
pub const HARMONY_SIZE: usize = 5;

impl Harmony {
    /// Generate the palette in HSL: four derived colors, then `base`.
    #[must_use]
    pub fn generate(self, base: Hsl) -> [Hsl; HARMONY_SIZE] {
        let [a, b, c, d] = match self {
            Self::Analogous => [20, 40, 60, 80].map(|inc| shift::hue(base, inc)),
            Self::Monochromatic => [10, 20, 30, 40].map(|inc| shift::saturation(base, inc)),
            Self::Triad => [(120, 0), (240, 0), (120, 10), (240, 20)]
                .map(|(h, l)| shift::hue_light(base, h, l)),
            Self::Complementary => [(180, 0), (180, 20), (0, 20), (0, 10)]
                .map(|(h, l)| shift::hue_light(base, h, l)),
            Self::Compound => [
                shift::hue_light(base, 180, 0),
                shift::hue_light(base, 180, 20),
                shift::hue(base, 30),
                shift::hue(base, 60),
            ],
            Self::Shades => [10, 20, 30, 40].map(|inc| shift::shade(base, inc)),
        };
        [a, b, c, d, base]
    }

    /// Machine name, lowercase (`"analogous"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triad => "triad",
            Self::Complementary => "complementary",
            Self::Compound => "compound",
            Self::Shades => "shades",
        }
    }

    /// Display name, capitalized (`"Analogous"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Monochromatic => "Monochromatic",
            Self::Triad => "Triad",
            Self::Complementary => "Complementary",
            Self::Compound => "Compound",
            Self::Shades => "Shades",
        }
    }

    /// Parse a harmony from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .find(|h| h.name().eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    /// All harmonies, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Monochromatic,
            Self::Triad,
            Self::Complementary,
            Self::Compound,
            Self::Shades,
        ]
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A harmony name that matches none of the six rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarmonyError {
    #[error(
        "unknown harmony {0:?} (expected one of: analogous, monochromatic, triad, complementary, compound, shades)"
    )]
    UnknownHarmony(String),
}

impl FromStr for Harmony {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| HarmonyError::UnknownHarmony(s.to_owned()))
    }
}

impl TryFrom<String> for Harmony {
    type Error = HarmonyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Harmony> for &'static str {
    fn from(h: Harmony) -> Self {
        h.name()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hues(colors: &[Hsl]) -> Vec<u16> {
        colors.iter().map(|c| c.h).collect()
    }

    fn sats(colors: &[Hsl]) -> Vec<u8> {
        colors.iter().map(|c| c.s).collect()
    }

    fn lights(colors: &[Hsl]) -> Vec<u8> {
        colors.iter().map(|c| c.l).collect()
    }

    /// Every harmony ends with the base color.
    #[test]
    fn base_is_always_last() {
        let bases = [
            Hsl::new(0, 100, 50),
            Hsl::new(220, 60, 50),
            Hsl::new(359, 0, 100),
            Hsl::new(45, 95, 85),
        ];
        for &kind in Harmony::all() {
            for base in bases {
                let out = kind.generate(base);
                assert_eq!(out.len(), HARMONY_SIZE);
                assert_eq!(out[4], base, "{kind:?}");
            }
        }
    }

    /// Every derived field stays in range.
    #[test]
    fn outputs_stay_in_range() {
        for &kind in Harmony::all() {
            for h in (0..360).step_by(7) {
                for s in (0..=100).step_by(5) {
                    for l in (0..=100).step_by(5) {
                        for c in kind.generate(Hsl::new(h, s, l)) {
                            assert!(c.h < 360 && c.s <= 100 && c.l <= 100, "{kind:?} -> {c:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn analogous_red() {
        let out = Harmony::Analogous.generate(Hsl::new(0, 100, 50));
        assert_eq!(hues(&out), [20, 40, 60, 80, 0]);
        assert_eq!(sats(&out), [100; 5]);
        assert_eq!(lights(&out), [50; 5]);
    }

    #[test]
    fn analogous_wraps_hue() {
        let out = Harmony::Analogous.generate(Hsl::new(300, 50, 50));
        assert_eq!(hues(&out), [320, 340, 0, 20, 300]);
    }

    #[test]
    fn monochromatic_adds_below_ceiling() {
        let out = Harmony::Monochromatic.generate(Hsl::new(120, 40, 30));
        assert_eq!(sats(&out), [50, 60, 70, 80, 40]);
        assert_eq!(hues(&out), [120; 5]);
        assert_eq!(lights(&out), [30; 5]);
    }

    #[test]
    fn monochromatic_reflects_instead_of_clamping() {
        let out = Harmony::Monochromatic.generate(Hsl::new(10, 95, 50));
        assert_eq!(sats(&out), [85, 75, 65, 55, 95]);
    }

    #[test]
    fn monochromatic_mixed_reflection() {
        // 70 + 30 hits the ceiling, 70 + 20 does not.
        let out = Harmony::Monochromatic.generate(Hsl::new(10, 70, 50));
        assert_eq!(sats(&out), [80, 90, 40, 30, 70]);
    }

    #[test]
    fn triad_offsets() {
        let out = Harmony::Triad.generate(Hsl::new(220, 60, 50));
        assert_eq!(hues(&out), [340, 100, 340, 100, 220]);
        assert_eq!(lights(&out), [50, 50, 60, 70, 50]);
        assert_eq!(sats(&out), [60; 5]);
    }

    #[test]
    fn triad_reflects_lightness_at_ceiling() {
        let out = Harmony::Triad.generate(Hsl::new(0, 50, 85));
        assert_eq!(lights(&out), [85, 85, 95, 65, 85]);
    }

    #[test]
    fn complementary_offsets() {
        let out = Harmony::Complementary.generate(Hsl::new(220, 60, 50));
        assert_eq!(hues(&out), [40, 40, 220, 220, 220]);
        assert_eq!(lights(&out), [50, 70, 70, 60, 50]);
    }

    #[test]
    fn complementary_reflects_near_white() {
        let out = Harmony::Complementary.generate(Hsl::new(90, 20, 90));
        assert_eq!(lights(&out), [90, 70, 70, 80, 90]);
    }

    #[test]
    fn compound_offsets() {
        let out = Harmony::Compound.generate(Hsl::new(200, 80, 40));
        assert_eq!(hues(&out), [20, 20, 230, 260, 200]);
        assert_eq!(lights(&out), [40, 60, 40, 40, 40]);
    }

    #[test]
    fn shades_without_wrap() {
        let out = Harmony::Shades.generate(Hsl::new(220, 60, 50));
        assert_eq!(lights(&out), [60, 70, 80, 90, 50]);
    }

    #[test]
    fn shades_wrap_modulo_100() {
        let out = Harmony::Shades.generate(Hsl::new(220, 60, 75));
        assert_eq!(lights(&out), [85, 95, 5, 15, 75]);
    }

    #[test]
    fn deterministic() {
        let base = Hsl::new(17, 33, 66);
        for &kind in Harmony::all() {
            assert_eq!(kind.generate(base), kind.generate(base));
        }
    }

    // ── Names ───────────────────────────────────────────────────────────

    #[test]
    fn six_harmonies() {
        assert_eq!(Harmony::all().len(), 6);
    }

    #[test]
    fn name_roundtrip() {
        for &kind in Harmony::all() {
            assert_eq!(Harmony::from_name(kind.name()), Some(kind));
            assert_eq!(Harmony::from_name(kind.label()), Some(kind));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("TRIAD".parse::<Harmony>(), Ok(Harmony::Triad));
        assert_eq!(" Shades ".parse::<Harmony>(), Ok(Harmony::Shades));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "tetradic".parse::<Harmony>(),
            Err(HarmonyError::UnknownHarmony("tetradic".to_owned()))
        );
    }

    #[test]
    fn default_is_analogous() {
        assert_eq!(Harmony::default(), Harmony::Analogous);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Harmony::Complementary.to_string(), "Complementary");
    }
}
