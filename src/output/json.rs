use crate::cli::Commands;
use crate::consts::DATE_TIME_FORMAT;
use crate::core::{EntryReport, Outcome, ResolvedDate, Summary};

fn date_json(date: &ResolvedDate) -> serde_json::Value {
    match date {
        ResolvedDate::Content { pattern, at } => serde_json::json!({
            "source": "content",
            "pattern": pattern,
            "value": at.format(DATE_TIME_FORMAT).to_string(),
        }),
        ResolvedDate::History { at } => serde_json::json!({
            "source": "git",
            "value": at.to_rfc3339(),
        }),
        ResolvedDate::Template => serde_json::json!({ "source": "template" }),
    }
}

fn entry_json(report: &EntryReport) -> serde_json::Value {
    let reason = match &report.outcome {
        Outcome::Skipped(reason) => Some(reason.as_str().to_string()),
        Outcome::Failed(err) => Some(err.to_string()),
        Outcome::Moved | Outcome::Renamed => None,
    };
    serde_json::json!({
        "source": report.source.display().to_string(),
        "destination": report.destination.as_ref().map(|d| d.display().to_string()),
        "status": report.outcome.status(),
        "reason": reason,
        "date": report.date.as_ref().map(date_json),
    })
}

/// Full run report as pretty JSON
pub(crate) fn output_report_json(
    command: Commands,
    dry_run: bool,
    reports: &[EntryReport],
    summary: &Summary,
) -> String {
    let output = serde_json::json!({
        "command": command.name(),
        "dry_run": dry_run,
        "entries": reports.iter().map(entry_json).collect::<Vec<_>>(),
        "summary": summary,
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
