//! First-commit timestamps from version control

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::{DateTime, FixedOffset};

use crate::utils::debug_log;

/// Answers "when was this file first committed?"
///
/// Any failure is reported as `None`: the history is a fallback, not a
/// source of truth.
pub(crate) trait HistorySource {
    fn first_commit_time(&self, path: &Path) -> Option<DateTime<FixedOffset>>;
}

/// Used when the fallback is switched off or git is unavailable
pub(crate) struct NoHistory;

impl HistorySource for NoHistory {
    fn first_commit_time(&self, _path: &Path) -> Option<DateTime<FixedOffset>> {
        None
    }
}

/// Queries `git log` in the working root
pub(crate) struct GitHistory {
    root: PathBuf,
}

impl GitHistory {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Check that a `git` executable can be spawned
    pub(crate) fn is_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl HistorySource for GitHistory {
    fn first_commit_time(&self, path: &Path) -> Option<DateTime<FixedOffset>> {
        let output = Command::new("git")
            .args(["log", "--follow", "--format=%aI", "--diff-filter=A", "--"])
            .arg(path)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                debug_log(format_args!("git log for {} failed to start: {e}", path.display()));
                return None;
            }
        };
        if !output.status.success() {
            debug_log(format_args!(
                "git log for {} exited with {}: {}",
                path.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_first_add(&stdout)
    }
}

/// `git log` lists newest first, so the earliest add is the last line
fn parse_first_add(log_output: &str) -> Option<DateTime<FixedOffset>> {
    let line = log_output.lines().map(str::trim).rfind(|l| !l.is_empty())?;
    DateTime::parse_from_rfc3339(line).ok()
}
