// SPDX-License-Identifier: MIT
//
// swatch-color: the conversion layer behind swatch.
//
// Three equivalent views of one sRGB color:
//
//   #RRGGBB hex  ↔  Rgb (8-bit channels)  ↔  Hsl (integer degrees / percents)
//
// Everything here is a pure function over plain `Copy` values. Harmony
// generation works entirely on `Hsl` and only converts back through this
// crate once per output slot.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Channel math rounds f64 back into u8/u16 after an explicit clamp.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Conversions must reproduce reference palettes bit for bit: no fused multiply-add.
#![allow(clippy::suboptimal_flops)]

pub mod color;
pub mod error;
pub mod hex;

pub use color::{Color, Hsl, Rgb, hsl_to_rgb, rgb_to_hsl};
pub use error::{ColorError, FormatIssue};
pub use hex::{hex_to_rgb, rgb_to_hex};
