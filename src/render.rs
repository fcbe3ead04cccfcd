// SPDX-License-Identifier: MIT
//
// Palette presentation, the display side of swatch.
//
// Text layout, one line per slot (base last):
//
//   Triad palette for #3366CC
//     [ 1 ]  HEX (#CC3399)  RGB (204, 51, 153)   HSL (340, 60%, 50%)
//     ...
//     [ 5 ]  HEX (#3366CC)  RGB (51, 102, 204)   HSL (220, 60%, 50%)   base
//
// `[ n ]` is a TrueColor block when color output is enabled, and just the
// slot number otherwise. JSON output is the serde form of the engine types.

use std::io::{self, Write};

use anyhow::Result;
use swatch_color::{Color, Rgb};
use swatch_harmony::{Harmony, HarmonyResult};

use crate::ansi;
use crate::config::Format;

/// Display knobs resolved from flags and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Paint swatches with ANSI escapes.
    pub color: bool,
    /// Swatch block width in cells.
    pub swatch_width: usize,
}

/// Widest `(r, g, b)` and `(h, s%, l%)` cells.
const RGB_COLUMN: usize = "(255, 255, 255)".len();
const HSL_COLUMN: usize = "(359, 100%, 100%)".len();

/// Write one or more palettes in the chosen format.
///
/// # Errors
///
/// Propagates write and serialization failures.
pub fn palettes(
    w: &mut impl Write,
    results: &[HarmonyResult],
    format: Format,
    opts: RenderOptions,
) -> Result<()> {
    match format {
        Format::Text => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(w)?;
                }
                text(w, result, opts)?;
            }
        }
        Format::Json => {
            if let [single] = results {
                serde_json::to_writer_pretty(&mut *w, single)?;
            } else {
                serde_json::to_writer_pretty(&mut *w, results)?;
            }
            writeln!(w)?;
        }
    }
    Ok(())
}

/// Write a single palette as swatch lines.
///
/// # Errors
///
/// Propagates write failures.
pub fn text(w: &mut impl Write, result: &HarmonyResult, opts: RenderOptions) -> io::Result<()> {
    if opts.color {
        ansi::bold(w)?;
        write!(w, "{}", result.harmony().label())?;
        ansi::reset(w)?;
    } else {
        write!(w, "{}", result.harmony().label())?;
    }
    writeln!(w, " palette for {}", result.base().hex())?;

    let last = result.colors().len() - 1;
    for (i, color) in result.iter().enumerate() {
        write!(w, "  ")?;
        swatch(w, color.rgb(), &(i + 1).to_string(), opts)?;
        write!(
            w,
            "  HEX ({})  RGB {:<RGB_COLUMN$}  HSL ",
            color.hex(),
            format!("({})", color.rgb()),
        )?;
        let hsl = format!("({})", color.hsl());
        if i == last {
            writeln!(w, "{hsl:<HSL_COLUMN$}  base")?;
        } else {
            writeln!(w, "{hsl}")?;
        }
    }
    Ok(())
}

/// Write a single color's three forms.
///
/// # Errors
///
/// Propagates write and serialization failures.
pub fn inspect(w: &mut impl Write, color: &Color, format: Format, opts: RenderOptions) -> Result<()> {
    match format {
        Format::Text => {
            if opts.color {
                swatch(w, color.rgb(), "", opts)?;
                writeln!(w)?;
            }
            writeln!(w, "HEX  {}", color.hex())?;
            writeln!(w, "RGB  {}", color.rgb())?;
            writeln!(w, "HSL  {}", color.hsl())?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, color)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

/// List the harmony names accepted by `--harmony`.
///
/// # Errors
///
/// Propagates write failures.
pub fn harmonies(w: &mut impl Write) -> io::Result<()> {
    for harmony in Harmony::all() {
        writeln!(w, "{}", harmony.name())?;
    }
    Ok(())
}

/// A color block with a centered label, or the bare label without color.
fn swatch(w: &mut impl Write, rgb: Rgb, label: &str, opts: RenderOptions) -> io::Result<()> {
    if !opts.color {
        return write!(w, "{label}");
    }
    ansi::bg(w, rgb)?;
    ansi::fg(w, label_color(rgb))?;
    write!(w, "{label:^width$}", width = opts.swatch_width)?;
    ansi::reset(w)
}

/// Black or white, whichever reads on top of `bg`.
fn label_color(bg: Rgb) -> Rgb {
    if bg.is_dark() { Rgb::WHITE } else { Rgb::BLACK }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
