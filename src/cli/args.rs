//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_DOCS_DIR;

use super::commands::Commands;

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

#[derive(Parser)]
#[command(name = "docshift")]
#[command(
    about = "Move documentation files into a new layout and rename them by date",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Project root containing .git (default: current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR", default_value = ".")]
    pub(crate) root: PathBuf,

    /// Plan file with [[move]] and [[rename]] tables (default: <root>/docshift.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub(crate) plan: Option<PathBuf>,

    /// Show what would change without touching any file
    #[arg(short = 'n', long, global = true)]
    pub(crate) dry_run: bool,

    /// Output a JSON report instead of progress lines
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Documentation directory required by `rename` (default: docs)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) docs_dir: Option<PathBuf>,

    /// Never ask git for first-commit times
    #[arg(long, global = true)]
    pub(crate) no_git: bool,

    /// Zone for git timestamps: "commit" (default), "local", "UTC", "Asia/Taipei", ...
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Wait for Enter before exiting
    #[arg(long, global = true)]
    pub(crate) pause: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them off
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.no_git && config.no_git {
            self.no_git = true;
        }
        if !self.pause && config.pause {
            self.pause = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
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

        // A relative plan path in the user config belongs to the project, not the cwd
        if self.plan.is_none() {
            self.plan = config.plan.as_ref().map(|plan| self.root.join(plan));
        }
        if self.docs_dir.is_none() {
            self.docs_dir = config.docs_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color || self.json {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn docs_dir(&self) -> PathBuf {
        let dir = self
            .docs_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR));
        self.root.join(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("docshift").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn move_is_an_alias_for_reorganize() {
        assert_eq!(parse(&["move"]).command, Commands::Reorganize);
        assert_eq!(parse(&["reorganize"]).command, Commands::Reorganize);
        assert_eq!(parse(&["rename"]).command, Commands::Rename);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["docshift"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["rename", "-n", "--json", "-C", "/repo", "--no-git"]);
        assert!(cli.dry_run);
        assert!(cli.json);
        assert!(cli.no_git);
        assert_eq!(cli.root, PathBuf::from("/repo"));
        assert_eq!(cli.docs_dir(), PathBuf::from("/repo/docs"));
    }

    #[test]
    fn config_fills_unset_values_only() {
        let config = Config {
            debug: true,
            no_git: true,
            color: Some(ConfigColorMode::Always),
            plan: Some(PathBuf::from("from-config.toml")),
            timezone: Some("UTC".to_string()),
            docs_dir: Some(PathBuf::from("manual")),
            ..Config::default()
        };
        let cli = parse(&["rename", "--plan", "from-cli.toml", "--color", "never"])
            .with_config(&config);

        assert!(cli.debug);
        assert!(cli.no_git);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.plan, Some(PathBuf::from("from-cli.toml")));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.docs_dir(), PathBuf::from("./manual"));
    }

    #[test]
    fn config_plan_resolves_against_root() {
        let config = Config {
            plan: Some(PathBuf::from("plans/docs.toml")),
            ..Config::default()
        };
        let cli = parse(&["move", "-C", "/repo"]).with_config(&config);
        assert_eq!(cli.plan, Some(PathBuf::from("/repo/plans/docs.toml")));

        let config = Config {
            plan: Some(PathBuf::from("/shared/docs.toml")),
            ..Config::default()
        };
        let cli = parse(&["move", "-C", "/repo"]).with_config(&config);
        assert_eq!(cli.plan, Some(PathBuf::from("/shared/docs.toml")));
    }

    #[test]
    fn json_output_never_colored() {
        let cli = parse(&["move", "--json", "--color", "always"]);
        assert!(!cli.use_color());
        let cli = parse(&["move", "--color", "always"]);
        assert!(cli.use_color());
        let cli = parse(&["move", "--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }
}
