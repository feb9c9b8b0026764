//! Entry and report types shared by the remapper and the renamer

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EntryError;

/// One row of the mapping table: move `from` to `to`, both relative to the root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct MoveEntry {
    pub(crate) from: PathBuf,
    pub(crate) to: PathBuf,
}

/// One row of the rename table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct RenameEntry {
    pub(crate) path: PathBuf,
    #[serde(deserialize_with = "trimmed")]
    pub(crate) description: String,
}

fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Where a rename took its timestamp from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResolvedDate {
    /// Found in the file text; time is always 12:00
    Content {
        pattern: &'static str,
        at: NaiveDateTime,
    },
    /// First-commit time reported by git
    History { at: DateTime<FixedOffset> },
    /// Template documents carry no date
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipReason {
    SourceMissing,
    NoDateFound,
    AlreadyNamed,
}

impl SkipReason {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SkipReason::SourceMissing => "source missing",
            SkipReason::NoDateFound => "no date found",
            SkipReason::AlreadyNamed => "already named",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub(crate) enum Outcome {
    Moved,
    Renamed,
    Skipped(SkipReason),
    Failed(EntryError),
}

impl Outcome {
    pub(crate) fn status(&self) -> &'static str {
        match self {
            Outcome::Moved => "moved",
            Outcome::Renamed => "renamed",
            Outcome::Skipped(_) => "skipped",
            Outcome::Failed(_) => "error",
        }
    }
}

/// Result of processing a single table entry
#[derive(Debug)]
pub(crate) struct EntryReport {
    pub(crate) source: PathBuf,
    /// Target path, once one could be computed
    pub(crate) destination: Option<PathBuf>,
    /// Only set by the renamer
    pub(crate) date: Option<ResolvedDate>,
    pub(crate) outcome: Outcome,
}

impl EntryReport {
    pub(crate) fn new(source: PathBuf, outcome: Outcome) -> Self {
        Self {
            source,
            destination: None,
            date: None,
            outcome,
        }
    }

    pub(crate) fn with_destination(mut self, destination: PathBuf) -> Self {
        self.destination = Some(destination);
        self
    }

    pub(crate) fn with_date(mut self, date: Option<ResolvedDate>) -> Self {
        self.date = date;
        self
    }
}

/// Aggregate counts for a run; `moved` includes renames
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct Summary {
    pub(crate) moved: usize,
    pub(crate) skipped: usize,
    pub(crate) errors: usize,
}

impl Summary {
    pub(crate) fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Moved | Outcome::Renamed => self.moved += 1,
            Outcome::Skipped(_) => self.skipped += 1,
            Outcome::Failed(_) => self.errors += 1,
        }
    }

    pub(crate) fn from_reports(reports: &[EntryReport]) -> Self {
        let mut summary = Summary::default();
        for report in reports {
            summary.record(&report.outcome);
        }
        summary
    }

    pub(crate) fn changed_anything(&self) -> bool {
        self.moved > 0
    }
}
