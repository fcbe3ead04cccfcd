// SPDX-License-Identifier: MIT
//
// User configuration in `config.toml`.
//
// Every key is optional and command-line flags always win:
//
//   harmony = "triad"        # default harmony when -H is absent
//   color = "auto"           # auto | always | never
//   format = "text"          # text | json
//   swatch_width = 8         # swatch block width in cells (1..=40)
//
// The file lives at `<config_dir>/swatch/config.toml` unless `--config`
// names another path. A missing default file means defaults; a missing
// explicit file is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::Deserialize;
use swatch_harmony::Harmony;
use tracing::debug;

/// Narrowest and widest swatch block, in terminal cells.
pub const SWATCH_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 1..=40;

/// When to paint swatches with ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether stdout is a terminal.
    #[must_use]
    pub const fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Swatch lines with hex, RGB and HSL columns.
    #[default]
    Text,
    /// Machine-readable JSON on stdout.
    Json,
}

/// Parsed `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub harmony: Harmony,
    pub color: ColorMode,
    pub format: Format,
    pub swatch_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            harmony: Harmony::default(),
            color: ColorMode::default(),
            format: Format::default(),
            swatch_width: 8,
        }
    }
}

impl Config {
    /// `<config_dir>/swatch/config.toml`, if the platform has a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "swatch").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// # Errors
    ///
    /// Fails if the explicit file is unreadable, or any file that exists
    /// does not parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Some(path) = Self::default_path() else {
            debug!("no config directory on this platform; using defaults");
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents, &path.display().to_string()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file; using defaults");
                Ok(Self::default())
            }
            Err(err) => {
                Err(err).with_context(|| format!("failed to read config {}", path.display()))
            }
        }
    }

    /// Load a specific file, which must exist.
    ///
    /// # Errors
    ///
    /// Fails if the file is unreadable or does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&contents, &path.display().to_string())
    }

    /// Parse TOML text; `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML, unknown keys, bad values, or a swatch width
    /// outside 1..=40.
    pub fn parse(contents: &str, origin: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).with_context(|| format!("invalid config {origin}"))?;

        if !SWATCH_WIDTH_RANGE.contains(&config.swatch_width) {
            bail!(
                "invalid config {origin}: swatch_width {} is outside {}..={}",
                config.swatch_width,
                SWATCH_WIDTH_RANGE.start(),
                SWATCH_WIDTH_RANGE.end()
            );
        }

        debug!(origin, ?config, "loaded config");
        Ok(config)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
