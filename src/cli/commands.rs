//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Move files to the locations listed under [[move]] in the plan
    #[command(visible_alias = "move")]
    Reorganize,
    /// Rename files listed under [[rename]] to YYYYMMDD_HHMM_<description>
    Rename,
}

impl Commands {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Commands::Reorganize => "reorganize",
            Commands::Rename => "rename",
        }
    }

    /// Commit message suggested once the run has changed something
    pub(crate) fn commit_message(self) -> &'static str {
        match self {
            Commands::Reorganize => "Reorganize documentation layout",
            Commands::Rename => "Rename documents by date",
        }
    }
}
