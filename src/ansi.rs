// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation for swatch output.
//
// Pure functions that write SGR sequences to any `impl Write`. What to
// paint and when is the renderer's job; this module only knows the bytes.
// Swatches are always 24-bit TrueColor: a palette tool that snapped to the
// 256-color cube would show the wrong colors.

use std::io::{self, Write};

use swatch_color::Rgb;

/// Set the foreground (text) color, `ESC[38;2;R;G;Bm`.
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let Rgb { r, g, b } = color;
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set the background color, `ESC[48;2;R;G;Bm`.
#[inline]
pub fn bg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    let Rgb { r, g, b } = color;
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Bold text (SGR 1).
#[inline]
pub fn bold(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[1m")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}
