//! Path remapper: move each file in the mapping table to its new location

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::overlay::Overlay;
use crate::core::{EntryReport, MoveEntry, Outcome, RunOptions, SkipReason};
use crate::error::EntryError;
use crate::utils::debug_log;

/// Move every entry, reporting each one through `on_entry` as it completes.
///
/// Entries are independent: a failure is recorded and the next entry runs.
pub(crate) fn remap_files(
    root: &Path,
    entries: &[MoveEntry],
    options: RunOptions,
    mut on_entry: impl FnMut(&EntryReport),
) -> Vec<EntryReport> {
    let mut overlay = Overlay::default();
    let mut reports = Vec::with_capacity(entries.len());
    for entry in entries {
        let report = move_entry(root, entry, options, &mut overlay);
        on_entry(&report);
        reports.push(report);
    }
    reports
}

fn move_entry(
    root: &Path,
    entry: &MoveEntry,
    options: RunOptions,
    overlay: &mut Overlay,
) -> EntryReport {
    if !overlay.exists(root, &entry.from) {
        return EntryReport::new(entry.from.clone(), Outcome::Skipped(SkipReason::SourceMissing));
    }

    let outcome = match try_move(root, entry, options, overlay) {
        Ok(()) => Outcome::Moved,
        Err(e) => Outcome::Failed(e),
    };
    EntryReport::new(entry.from.clone(), outcome).with_destination(entry.to.clone())
}

fn try_move(
    root: &Path,
    entry: &MoveEntry,
    options: RunOptions,
    overlay: &mut Overlay,
) -> Result<(), EntryError> {
    if overlay.exists(root, &entry.to) {
        return Err(EntryError::DestinationExists {
            path: entry.to.clone(),
        });
    }
    if options.dry_run {
        overlay.record_move(&entry.from, &entry.to);
        return Ok(());
    }

    let source = root.join(&entry.from);
    let destination = root.join(&entry.to);
    let mut created = Vec::new();
    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        created = create_missing_dirs(parent).map_err(|source| EntryError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    relocate(&source, &destination).map_err(|e| {
        remove_dirs(&created);
        EntryError::Move {
            path: entry.from.clone(),
            source: e,
        }
    })
}

/// Create `dir` with its missing ancestors and return the ones created, deepest first
fn create_missing_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let missing: Vec<PathBuf> = dir
        .ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && fs::symlink_metadata(p).is_err())
        .map(Path::to_path_buf)
        .collect();
    if let Err(e) = fs::create_dir_all(dir) {
        remove_dirs(&missing);
        return Err(e);
    }
    Ok(missing)
}

fn remove_dirs(dirs: &[PathBuf]) {
    for dir in dirs {
        // Only empty directories go; anything else is left for the user
        let _ = fs::remove_dir(dir);
    }
}

/// Rename in place, or copy and delete when the paths are on different filesystems
pub(crate) fn relocate(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug_log(format_args!(
                "{} -> {} crosses filesystems, copying",
                from.display(),
                to.display()
            ));
            copy_then_remove(from, to)
        }
        Err(e) => Err(e),
    }
}

fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    if let Err(e) = fs::copy(from, to) {
        let _ = fs::remove_file(to);
        return Err(e);
    }
    if let Err(e) = fs::remove_file(from) {
        // Leave the entry as it was found
        let _ = fs::remove_file(to);
        return Err(e);
    }
    Ok(())
}
