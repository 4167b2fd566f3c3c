//! CLI argument definitions
//!
//! Global options plus the config-file merge (CLI args take precedence).

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::core::{SortKey, SortState, UnitMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Smallest first (default)
    #[default]
    Asc,
    /// Largest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "tokcost")]
#[command(about = "Estimate LLM API costs from token, word, or character counts", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Input quantity (falls back to the last-used value, then 100)
    #[arg(short, long, global = true, value_name = "QUANTITY")]
    pub(crate) input: Option<String>,

    /// Output quantity (falls back to the last-used value, then 100)
    #[arg(short, long, global = true, value_name = "QUANTITY")]
    pub(crate) output: Option<String>,

    /// Number of API calls
    #[arg(short = 'n', long, global = true, value_name = "COUNT")]
    pub(crate) calls: Option<u32>,

    /// Unit the quantities are expressed in
    #[arg(short, long, global = true, value_enum)]
    pub(crate) mode: Option<UnitMode>,

    /// Sort results by column
    #[arg(short = 'S', long, global = true, value_enum, value_name = "KEY")]
    pub(crate) sort_by: Option<SortKey>,

    /// Sort order (with --sort-by)
    #[arg(long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Do not persist the inputs for the next run
    #[arg(long, global = true)]
    pub(crate) no_save: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence).
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.no_save && config.no_save {
            self.no_save = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.mode.is_none() {
            self.mode = config.mode;
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Build the sort policy state the flags describe: one activation for
    /// ascending, a second on the same key for descending.
    pub(crate) fn sort_state(&self) -> SortState {
        let Some(key) = self.sort_by else {
            return SortState::Unsorted;
        };
        let ascending = SortState::Unsorted.activate(key);
        match self.order {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.activate(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn sort_state_unsorted_without_key() {
        let cli = parse(&["tokcost"]);
        assert_eq!(cli.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn sort_state_ascending_by_default() {
        let cli = parse(&["tokcost", "--sort-by", "total-cost"]);
        assert_eq!(cli.sort_state(), SortState::Ascending(SortKey::TotalCost));
    }

    #[test]
    fn sort_state_descending() {
        let cli = parse(&["tokcost", "--sort-by", "model", "--order", "desc"]);
        assert_eq!(cli.sort_state(), SortState::Descending(SortKey::Model));
    }

    #[test]
    fn config_mode_applies_when_cli_unset() {
        let cli = parse(&["tokcost"]);
        let config = Config {
            mode: Some(UnitMode::Words),
            ..Config::default()
        };
        assert_eq!(cli.with_config(&config).mode, Some(UnitMode::Words));
    }

    #[test]
    fn cli_mode_wins_over_config() {
        let cli = parse(&["tokcost", "--mode", "characters"]);
        let config = Config {
            mode: Some(UnitMode::Words),
            ..Config::default()
        };
        assert_eq!(cli.with_config(&config).mode, Some(UnitMode::Characters));
    }

    #[test]
    fn config_json_flag_merges() {
        let cli = parse(&["tokcost"]);
        let config = Config {
            json: true,
            ..Config::default()
        };
        assert!(cli.with_config(&config).json);
    }

    #[test]
    fn no_color_forces_off() {
        let cli = parse(&["tokcost", "--no-color", "--color", "always"]);
        assert!(!cli.use_color());
    }
}
