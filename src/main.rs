// SPDX-License-Identifier: MIT
//
// swatch: five-color harmony palettes in the terminal.
//
// This is the binary that wires the two library crates together:
//
//   swatch-color   → hex / RGB / HSL parsing and conversion
//   swatch-harmony → harmony rules, palette assembly, random base colors
//
// Each run flows through:
//
//   argv → Cli → Settings (flags over config.toml over defaults)
//   COLOR → input::normalize → Palette → HarmonyResult → render → stdout
//
// Logs go to stderr so `--format json` output stays clean.

mod ansi;
mod cli;
mod config;
mod input;
mod render;

use std::io::{self, BufWriter, IsTerminal, Write};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use swatch_color::Color;
use swatch_harmony::{Harmony, HarmonyResult, Palette};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::Cli;
use crate::config::Config;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("swatch: {e:#}");
        process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let mut out = BufWriter::new(stdout.lock());

    if cli.list {
        render::harmonies(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let settings = cli.settings(&config, is_terminal);
    debug!(?settings, "resolved settings");

    let palette = match &cli.base {
        Some(raw) => Palette::from_hex(&input::normalize(raw)?, settings.harmony)?,
        None => {
            let seed = cli.seed.unwrap_or_else(clock_seed);
            info!(seed, "no base color given; drawing one at random");
            Palette::random(seed, settings.harmony)
        }
    };

    if cli.inspect {
        let color = Color::from_rgb(palette.color);
        render::inspect(&mut out, &color, settings.format, settings.render)?;
    } else {
        let results: Vec<HarmonyResult> = if cli.all {
            Harmony::all()
                .iter()
                .map(|&harmony| palette.with_harmony(harmony).compute())
                .collect()
        } else {
            vec![palette.compute()]
        };
        render::palettes(&mut out, &results, settings.format, settings.render)?;
    }

    out.flush()?;
    Ok(())
}

/// A seed that differs between runs.
#[allow(clippy::cast_possible_truncation)]
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos() ^ d.as_secs() as u32)
}
