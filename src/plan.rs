//! Plan file: the mapping and rename tables as TOML data
//!
//! ```toml
//! [[move]]
//! from = "BUG_TRACKING.md"
//! to = "docs/archive/bug-tracking/bug_tracking_history.md"
//!
//! [[rename]]
//! path = "docs/testing/test_plan.md"
//! description = "測試計劃"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::consts::DEFAULT_PLAN_FILE;
use crate::core::{MoveEntry, RenameEntry};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Plan {
    #[serde(default, rename = "move")]
    pub(crate) moves: Vec<MoveEntry>,
    #[serde(default, rename = "rename")]
    pub(crate) renames: Vec<RenameEntry>,
}

impl Plan {
    /// Pick the plan path: explicit flag or config value, else `<root>/docshift.toml`
    pub(crate) fn locate(root: &Path, explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(|| root.join(DEFAULT_PLAN_FILE), Path::to_path_buf)
    }

    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::PlanNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| AppError::PlanRead {
            path: path.to_path_buf(),
            source,
        })?;
        let plan = Self::parse(&content).map_err(|source| AppError::PlanParse {
            path: path.to_path_buf(),
            source,
        })?;
        plan.validate()?;
        Ok(plan)
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub(crate) fn validate(&self) -> Result<(), AppError> {
        let mut sources = HashSet::new();
        let mut destinations = HashSet::new();

        for (i, entry) in self.moves.iter().enumerate() {
            let label = format!("move #{} ({})", i + 1, entry.from.display());
            check_relative(&label, &entry.from)?;
            check_relative(&label, &entry.to)?;
            if entry.from == entry.to {
                return Err(invalid(&label, "source and destination are the same path"));
            }
            if !sources.insert(&entry.from) {
                return Err(invalid(&label, "source listed more than once"));
            }
            if !destinations.insert(&entry.to) {
                return Err(invalid(
                    &label,
                    &format!("destination {} listed more than once", entry.to.display()),
                ));
            }
        }

        // Every entry works on the tree as it was before the run
        for (i, entry) in self.moves.iter().enumerate() {
            if destinations.contains(&entry.from) {
                let label = format!("move #{} ({})", i + 1, entry.from.display());
                return Err(invalid(&label, "source is the destination of another entry"));
            }
        }

        let mut paths = HashSet::new();
        for (i, entry) in self.renames.iter().enumerate() {
            let label = format!("rename #{} ({})", i + 1, entry.path.display());
            check_relative(&label, &entry.path)?;
            if !paths.insert(&entry.path) {
                return Err(invalid(&label, "path listed more than once"));
            }
            let description = entry.description.as_str();
            if description.is_empty() {
                return Err(invalid(&label, "description is empty"));
            }
            if description.contains(['/', '\\']) {
                return Err(invalid(&label, "description must not contain path separators"));
            }
        }

        Ok(())
    }
}

fn invalid(entry: &str, reason: &str) -> AppError {
    AppError::InvalidPlanEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    }
}

/// Paths in a plan stay inside the working root
fn check_relative(label: &str, path: &Path) -> Result<(), AppError> {
    if path.as_os_str().is_empty() {
        return Err(invalid(label, "path is empty"));
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(invalid(label, "path must not contain '..'"));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid(label, "path must be relative"));
            }
        }
    }
    Ok(())
}
