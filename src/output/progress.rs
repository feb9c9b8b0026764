//! Per-entry progress lines

use std::path::Path;

use crate::cli::Commands;
use crate::consts::{DATE_FORMAT, DATE_TIME_FORMAT};
use crate::core::{EntryReport, Outcome, ResolvedDate, SkipReason};
use crate::output::format::{CYAN, GREEN, RED, YELLOW, paint};
use crate::utils::Timezone;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ProgressOptions {
    pub(crate) command: Commands,
    pub(crate) dry_run: bool,
    pub(crate) use_color: bool,
    pub(crate) timezone: Timezone,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn describe_date(date: &ResolvedDate, timezone: Timezone) -> String {
    match date {
        ResolvedDate::Content { pattern, at } => {
            format!("date from content ({pattern}): {}", at.format(DATE_FORMAT))
        }
        ResolvedDate::History { at } => format!(
            "date from git history: {}",
            timezone.convert(*at).format(DATE_TIME_FORMAT)
        ),
        ResolvedDate::Template => "template file, no date used".to_string(),
    }
}

fn move_lines(report: &EntryReport, opts: &ProgressOptions) -> Vec<String> {
    let source = report.source.display();
    let line = match &report.outcome {
        Outcome::Moved | Outcome::Renamed => {
            let verb = if opts.dry_run { "would move" } else { "moved" };
            let dest = report
                .destination
                .as_deref()
                .map(|d| d.display().to_string())
                .unwrap_or_default();
            format!("{} {source} -> {dest}", paint(verb, GREEN, opts.use_color))
        }
        Outcome::Skipped(reason) => {
            format!("{} {source} ({reason})", paint("skipped", YELLOW, opts.use_color))
        }
        Outcome::Failed(err) => {
            format!("{} {source}: {err}", paint("error", RED, opts.use_color))
        }
    };
    vec![line]
}

fn rename_lines(report: &EntryReport, opts: &ProgressOptions) -> Vec<String> {
    if let Outcome::Skipped(SkipReason::SourceMissing) = report.outcome {
        return vec![format!(
            "{} {} (source missing)",
            paint("skipped", YELLOW, opts.use_color),
            report.source.display()
        )];
    }

    let mut lines = vec![format!(
        "{} {}",
        paint("processing", CYAN, opts.use_color),
        file_name(&report.source)
    )];
    if let Some(date) = &report.date {
        lines.push(format!("  {}", describe_date(date, opts.timezone)));
    }
    if let Some(dest) = &report.destination {
        lines.push(format!("  new name: {}", file_name(dest)));
    }

    let last = match &report.outcome {
        Outcome::Moved | Outcome::Renamed => {
            let verb = if opts.dry_run { "would rename" } else { "renamed" };
            paint(verb, GREEN, opts.use_color)
        }
        Outcome::Skipped(SkipReason::AlreadyNamed) => {
            format!("{} (already named)", paint("skipped", YELLOW, opts.use_color))
        }
        Outcome::Skipped(reason) => format!(
            "{} ({reason}, file left unchanged)",
            paint("skipped", YELLOW, opts.use_color)
        ),
        Outcome::Failed(err) => format!("{} {err}", paint("error", RED, opts.use_color)),
    };
    lines.push(format!("  {last}"));
    lines
}

/// Lines describing one processed entry, without trailing newlines
pub(crate) fn entry_lines(report: &EntryReport, opts: &ProgressOptions) -> Vec<String> {
    match opts.command {
        Commands::Reorganize => move_lines(report, opts),
        Commands::Rename => rename_lines(report, opts),
    }
}

pub(crate) fn print_entry(report: &EntryReport, opts: &ProgressOptions) {
    for line in entry_lines(report, opts) {
        println!("{line}");
    }
}
