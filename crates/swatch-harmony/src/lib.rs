//! # swatch-harmony: five-color palettes from one base color
//!
//! Derives four related colors from a base color using one of six classic
//! harmony rules, and assembles all five into fully populated colors.
//!
//! # Architecture
//!
//! ```text
//! "#RRGGBB" + Harmony
//!     │
//!     ▼
//! swatch-color: hex → Rgb → Hsl
//!     │
//!     ▼
//! harmony.rs:  pick the rule, produce 4 derived Hsl + base (base last)
//!     │         └─ shift.rs: hue rotation, reflect and wrap primitives
//!     ▼
//! engine.rs:   Hsl → Rgb → hex for each slot → HarmonyResult
//! ```
//!
//! Every step is pure and synchronous. The caller owns the [`Palette`]
//! (base color + harmony) and replaces it wholesale on each change; nothing
//! in this crate holds state between calls.
//!
//! ```
//! use swatch_harmony::{Harmony, compute_harmony};
//!
//! let result = compute_harmony("#FF0000", Harmony::Analogous).unwrap();
//! let hues: Vec<u16> = result.iter().map(|c| c.hsl().h).collect();
//! assert_eq!(hues, [20, 40, 60, 80, 0]);
//! ```

// Percent math narrows checked i16/u16 sums back into u8.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod engine;
pub mod harmony;
pub mod random;
pub mod shift;

pub use engine::{HarmonyResult, Palette, compute_harmony, harmonize};
pub use harmony::{Harmony, HarmonyError};
pub use swatch_color::{Color, ColorError, Hsl, Rgb};
