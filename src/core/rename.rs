//! Date-based renamer
//!
//! Each entry gets a date from its own text first and from git history
//! second, and is renamed to `YYYYMMDD_HHMM_<description>.<ext>` in the same
//! directory. Entries without a date are left alone.

use std::fs;
use std::path::Path;

use crate::core::date::extract_date;
use crate::core::history::HistorySource;
use crate::core::naming::{is_template, target_file_name};
use crate::core::overlay::Overlay;
use crate::core::{EntryReport, Outcome, RenameEntry, ResolvedDate, RunOptions, SkipReason};
use crate::error::EntryError;
use crate::utils::{Timezone, debug_log};

pub(crate) struct RenameContext<'a> {
    pub(crate) root: &'a Path,
    pub(crate) history: &'a dyn HistorySource,
    pub(crate) timezone: Timezone,
    pub(crate) options: RunOptions,
}

pub(crate) fn rename_files(
    ctx: &RenameContext<'_>,
    entries: &[RenameEntry],
    mut on_entry: impl FnMut(&EntryReport),
) -> Vec<EntryReport> {
    let mut overlay = Overlay::default();
    let mut reports = Vec::with_capacity(entries.len());
    for entry in entries {
        let report = rename_entry(ctx, entry, &mut overlay);
        on_entry(&report);
        reports.push(report);
    }
    reports
}

/// Content date first, then first-commit time
fn resolve_date(
    ctx: &RenameContext<'_>,
    entry: &RenameEntry,
    source: &Path,
) -> Option<ResolvedDate> {
    if is_template(&entry.path, &entry.description) {
        return Some(ResolvedDate::Template);
    }

    match fs::read_to_string(source) {
        Ok(content) => {
            if let Some((pattern, at)) = extract_date(&content) {
                return Some(ResolvedDate::Content { pattern, at });
            }
            debug_log(format_args!("no content date in {}", entry.path.display()));
        }
        Err(e) => {
            eprintln!(
                "Warning: could not read {}: {e}",
                entry.path.display()
            );
        }
    }

    ctx.history
        .first_commit_time(&entry.path)
        .map(|at| ResolvedDate::History { at })
}

fn rename_entry(
    ctx: &RenameContext<'_>,
    entry: &RenameEntry,
    overlay: &mut Overlay,
) -> EntryReport {
    let Some(source) = overlay.locate(ctx.root, &entry.path) else {
        return EntryReport::new(
            entry.path.clone(),
            Outcome::Skipped(SkipReason::SourceMissing),
        );
    };

    let Some(date) = resolve_date(ctx, entry, &source) else {
        return EntryReport::new(entry.path.clone(), Outcome::Skipped(SkipReason::NoDateFound));
    };

    let new_name = target_file_name(&entry.path, &entry.description, &date, ctx.timezone);
    let target = entry.path.with_file_name(&new_name);
    let report = EntryReport::new(entry.path.clone(), Outcome::Renamed)
        .with_destination(target.clone())
        .with_date(Some(date));

    if target == entry.path {
        return EntryReport {
            outcome: Outcome::Skipped(SkipReason::AlreadyNamed),
            ..report
        };
    }

    if overlay.exists(ctx.root, &target) {
        return EntryReport {
            outcome: Outcome::Failed(EntryError::DestinationExists { path: target }),
            ..report
        };
    }
    if ctx.options.dry_run {
        overlay.record_move(&entry.path, &target);
        return report;
    }

    let destination = ctx.root.join(&target);
    match fs::rename(&source, &destination) {
        Ok(()) => report,
        Err(source) => EntryReport {
            outcome: Outcome::Failed(EntryError::Rename {
                path: entry.path.clone(),
                source,
            }),
            ..report
        },
    }
}
