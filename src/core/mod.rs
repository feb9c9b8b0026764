//! Core file operations shared by the CLI commands
//!
//! Nothing here prints progress; callers observe each `EntryReport` as it
//! is produced and decide how to render it.

pub(crate) mod date;
pub(crate) mod history;
pub(crate) mod naming;
pub(crate) mod overlay;
pub(crate) mod remap;
pub(crate) mod rename;
pub(crate) mod types;

pub(crate) use history::{GitHistory, HistorySource, NoHistory};
pub(crate) use remap::remap_files;
pub(crate) use rename::{RenameContext, rename_files};
pub(crate) use types::{
    EntryReport, MoveEntry, Outcome, RenameEntry, ResolvedDate, SkipReason, Summary,
};

/// Options shared by both operations
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunOptions {
    /// Compute and report every outcome without touching the filesystem
    pub(crate) dry_run: bool,
}
