//! Offset primitives shared by every harmony rule.
//!
//! Each harmony is a fixed set of offsets applied to the base color through
//! one of these transforms. The out-of-range policy differs per field and is
//! part of the palette contract:
//!
//! | Transform      | Field      | At or past the bound             |
//! |----------------|------------|----------------------------------|
//! | [`rotate_hue`] | hue        | subtract 360 (wrap)              |
//! | [`reflect_up`] | saturation | subtract the increment (reflect) |
//! | [`reflect_both`] | lightness | reflect at 100 and at 0         |
//! | [`wrap_percent`] | lightness | subtract 100 (wrap)             |
//!
//! Reflection is not a clamp: saturation 95 plus 20 becomes 75, not 100.

use swatch_color::Hsl;

// ---------------------------------------------------------------------------
// Scalar primitives
// ---------------------------------------------------------------------------

/// Rotate a hue forward by `inc` degrees, wrapping once past 360.
///
/// Assumes `h < 360` and `inc < 360`, which every harmony satisfies.
#[must_use]
pub const fn rotate_hue(h: u16, inc: u16) -> u16 {
    let sum = h + inc;
    if sum >= 360 { sum - 360 } else { sum }
}

/// Add `inc` to a percentage, or subtract it instead if the sum would reach 100.
#[must_use]
pub const fn reflect_up(v: u8, inc: u8) -> u8 {
    if v as u16 + inc as u16 >= 100 {
        v.saturating_sub(inc)
    } else {
        v + inc
    }
}

/// Add a signed `inc` to a percentage, reflecting at both bounds.
///
/// If the sum reaches 100 the increment is subtracted instead; if it falls
/// to 0 or below the increment is likewise applied in the opposite
/// direction. Harmony offsets are never negative, so the lower bound only
/// triggers for `v == 0, inc == 0`, where both directions give 0.
#[must_use]
pub fn reflect_both(v: u8, inc: i16) -> u8 {
    let v = i16::from(v);
    let sum = v + inc;
    let out = if sum >= 100 || sum <= 0 { v - inc } else { sum };
    out.clamp(0, 100) as u8
}

/// Add `inc` to a percentage, wrapping once past 100.
#[must_use]
pub const fn wrap_percent(v: u8, inc: u8) -> u8 {
    let sum = v as u16 + inc as u16;
    if sum >= 100 { (sum - 100) as u8 } else { sum as u8 }
}

// ---------------------------------------------------------------------------
// Color transforms
// ---------------------------------------------------------------------------

/// Rotate the hue, keep saturation and lightness.
#[must_use]
pub const fn hue(base: Hsl, inc: u16) -> Hsl {
    Hsl {
        h: rotate_hue(base.h, inc),
        ..base
    }
}

/// Reflect-shift the saturation, keep hue and lightness.
#[must_use]
pub const fn saturation(base: Hsl, inc: u8) -> Hsl {
    Hsl {
        s: reflect_up(base.s, inc),
        ..base
    }
}

/// The two-parameter helper: rotate the hue and reflect-shift the lightness.
#[must_use]
pub fn hue_light(base: Hsl, hue_inc: u16, light_inc: i16) -> Hsl {
    Hsl {
        h: rotate_hue(base.h, hue_inc),
        l: reflect_both(base.l, light_inc),
        ..base
    }
}

/// Wrap-shift the lightness, keep hue and saturation.
#[must_use]
pub const fn shade(base: Hsl, inc: u8) -> Hsl {
    Hsl {
        l: wrap_percent(base.l, inc),
        ..base
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_hue_within_range() {
        assert_eq!(rotate_hue(10, 20), 30);
    }

    #[test]
    fn rotate_hue_wraps_at_360() {
        assert_eq!(rotate_hue(340, 20), 0);
        assert_eq!(rotate_hue(350, 80), 70);
        assert_eq!(rotate_hue(359, 240), 239);
    }

    #[test]
    fn reflect_up_adds_below_ceiling() {
        assert_eq!(reflect_up(50, 40), 90);
        assert_eq!(reflect_up(89, 10), 99);
    }

    #[test]
    fn reflect_up_subtracts_at_ceiling() {
        assert_eq!(reflect_up(90, 10), 80);
        assert_eq!(reflect_up(95, 20), 75);
        assert_eq!(reflect_up(100, 40), 60);
    }

    #[test]
    fn reflect_up_never_underflows() {
        assert_eq!(reflect_up(90, 200), 0);
    }

    #[test]
    fn reflect_both_reflects_at_ceiling() {
        assert_eq!(reflect_both(85, 10), 95);
        assert_eq!(reflect_both(85, 20), 65);
        assert_eq!(reflect_both(90, 10), 80);
    }

    #[test]
    fn reflect_both_zero_increment_is_identity() {
        for v in 0..=99 {
            assert_eq!(reflect_both(v, 0), v);
        }
    }

    #[test]
    fn reflect_both_reflects_at_floor() {
        assert_eq!(reflect_both(5, -10), 15);
        assert_eq!(reflect_both(10, -10), 20);
        assert_eq!(reflect_both(30, -10), 20);
    }

    #[test]
    fn wrap_percent_wraps_at_100() {
        assert_eq!(wrap_percent(50, 40), 90);
        assert_eq!(wrap_percent(60, 40), 0);
        assert_eq!(wrap_percent(75, 30), 5);
        assert_eq!(wrap_percent(100, 10), 10);
    }

    #[test]
    fn transforms_touch_only_their_field() {
        let base = Hsl::new(300, 40, 60);
        assert_eq!(hue(base, 90), Hsl::new(30, 40, 60));
        assert_eq!(saturation(base, 30), Hsl::new(300, 70, 60));
        assert_eq!(hue_light(base, 120, 20), Hsl::new(60, 40, 80));
        assert_eq!(shade(base, 40), Hsl::new(300, 40, 0));
    }
}
