use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors: the run stops before any entry is processed.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{} is not a git repository root (no .git found); run docshift from the project root", root.display())]
    NotARepository { root: PathBuf },

    #[error("Documentation directory not found: {}", path.display())]
    MissingDocsDir { path: PathBuf },

    #[error("Plan file not found: {} (pass --plan or create docshift.toml)", path.display())]
    PlanNotFound { path: PathBuf },

    #[error("Failed to read plan {}: {source}", path.display())]
    PlanRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse plan {}: {source}", path.display())]
    PlanParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid plan entry {entry}: {reason}")]
    InvalidPlanEntry { entry: String, reason: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },
}

/// Per-entry failures. These are reported and counted, never fatal.
#[derive(Debug, Error)]
pub(crate) enum EntryError {
    #[error("destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to move {}: {source}", path.display())]
    Move {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to rename {}: {source}", path.display())]
    Rename {
        path: PathBuf,
        source: std::io::Error,
    },
}
