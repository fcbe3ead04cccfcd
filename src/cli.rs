// SPDX-License-Identifier: MIT
//
// Command-line surface.
//
//   swatch [COLOR] [-H <harmony> | -a] [-i] [-l] [--seed N]
//          [-f text|json] [--color auto|always|never] [--width N]
//          [--config PATH] [-v...]
//
// Flags override `config.toml`, which overrides built-in defaults.
// `Cli::settings` folds the three layers into one `Settings`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use swatch_harmony::Harmony;

use crate::config::{ColorMode, Config, Format, SWATCH_WIDTH_RANGE};
use crate::render::RenderOptions;

#[derive(Debug, Parser)]
#[command(
    name = "swatch",
    version,
    about = "Five-color harmony palettes from a single base color"
)]
pub struct Cli {
    /// Base color as `#RRGGBB`, `RRGGBB` or `rgb(r, g, b)`; random when omitted
    #[arg(value_name = "COLOR")]
    pub base: Option<String>,

    /// Harmony rule (see --list)
    #[arg(short = 'H', long, value_name = "HARMONY")]
    pub harmony: Option<Harmony>,

    /// Show every harmony for the base color
    #[arg(short, long, conflicts_with = "harmony")]
    pub all: bool,

    /// Show the base color's hex, RGB and HSL forms only
    #[arg(short, long, conflicts_with_all = ["harmony", "all"])]
    pub inspect: bool,

    /// List harmony names and exit
    #[arg(short, long, exclusive = true)]
    pub list: bool,

    /// Seed for the random base color
    #[arg(long, value_name = "N")]
    pub seed: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// When to paint swatches
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Swatch block width in cells
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=40))]
    pub width: Option<u16>,

    /// Read this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Effective options after layering flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub harmony: Harmony,
    pub format: Format,
    pub render: RenderOptions,
}

impl Cli {
    /// Resolve flags against `config`; `is_terminal` describes stdout.
    #[must_use]
    pub fn settings(&self, config: &Config, is_terminal: bool) -> Settings {
        let format = self.format.unwrap_or(config.format);
        // Escapes would corrupt JSON.
        let color = format == Format::Text
            && self.color.unwrap_or(config.color).enabled(is_terminal);
        let swatch_width = self
            .width
            .map_or(config.swatch_width, usize::from)
            .clamp(*SWATCH_WIDTH_RANGE.start(), *SWATCH_WIDTH_RANGE.end());

        Settings {
            harmony: self.harmony.unwrap_or(config.harmony),
            format,
            render: RenderOptions {
                color,
                swatch_width,
            },
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("swatch").chain(args.iter().copied())).unwrap()
    }

    fn rejects(args: &[&str]) -> bool {
        Cli::try_parse_from(std::iter::once("swatch").chain(args.iter().copied())).is_err()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation() {
        let cli = parse(&[]);
        assert_eq!(cli.base, None);
        assert_eq!(cli.harmony, None);
        assert!(!cli.all && !cli.inspect && !cli.list);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn color_and_harmony() {
        let cli = parse(&["#3366CC", "-H", "Triad"]);
        assert_eq!(cli.base.as_deref(), Some("#3366CC"));
        assert_eq!(cli.harmony, Some(Harmony::Triad));

        let cli = parse(&["--harmony", "shades", "ff0000"]);
        assert_eq!(cli.harmony, Some(Harmony::Shades));
    }

    #[test]
    fn unknown_harmony_is_rejected() {
        assert!(rejects(&["-H", "tetradic"]));
    }

    #[test]
    fn conflicting_modes_are_rejected() {
        assert!(rejects(&["-a", "-H", "triad"]));
        assert!(rejects(&["-i", "-a"]));
        assert!(rejects(&["--list", "#FF0000"]));
    }

    #[test]
    fn width_is_range_checked() {
        assert_eq!(parse(&["--width", "40"]).width, Some(40));
        assert!(rejects(&["--width", "0"]));
        assert!(rejects(&["--width", "41"]));
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vvv"]).verbose, 3);
    }

    #[test]
    fn settings_fall_back_to_config() {
        let config = Config {
            harmony: Harmony::Compound,
            color: ColorMode::Always,
            format: Format::Text,
            swatch_width: 12,
        };
        let settings = parse(&[]).settings(&config, false);
        assert_eq!(
            settings,
            Settings {
                harmony: Harmony::Compound,
                format: Format::Text,
                render: RenderOptions {
                    color: true,
                    swatch_width: 12,
                },
            }
        );
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            harmony: Harmony::Compound,
            color: ColorMode::Always,
            format: Format::Text,
            swatch_width: 12,
        };
        let settings = parse(&["-H", "triad", "--color", "never", "--width", "4"])
            .settings(&config, true);
        assert_eq!(settings.harmony, Harmony::Triad);
        assert!(!settings.render.color);
        assert_eq!(settings.render.swatch_width, 4);
    }

    #[test]
    fn auto_color_follows_terminal() {
        let config = Config::default();
        assert!(parse(&[]).settings(&config, true).render.color);
        assert!(!parse(&[]).settings(&config, false).render.color);
    }

    #[test]
    fn json_never_carries_color() {
        let config = Config::default();
        let settings = parse(&["-f", "json", "--color", "always"]).settings(&config, true);
        assert_eq!(settings.format, Format::Json);
        assert!(!settings.render.color);
    }
}
