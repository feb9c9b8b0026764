use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::consts::{FILENAME_STAMP_FORMAT, TEMPLATE_PREFIX};
use crate::core::ResolvedDate;
use crate::utils::Timezone;

/// True when the entry describes a template rather than a dated document
pub(crate) fn is_template(path: &Path, description: &str) -> bool {
    let path_lower = path.to_string_lossy().to_lowercase();
    path_lower.contains("template") || description.to_lowercase().contains("template")
}

fn with_extension(stem: String, current: &Path) -> String {
    match current.extension() {
        Some(ext) => format!("{stem}.{}", ext.to_string_lossy()),
        None => stem,
    }
}

fn stamp(at: &NaiveDateTime) -> String {
    at.format(FILENAME_STAMP_FORMAT).to_string()
}

fn history_stamp(at: DateTime<FixedOffset>, timezone: Timezone) -> String {
    timezone
        .convert(at)
        .format(FILENAME_STAMP_FORMAT)
        .to_string()
}

/// Build the new file name (no directory) for `current`.
///
/// `YYYYMMDD_HHMM_<description>.<ext>` for dated entries,
/// `TEMPLATE_<description>.<ext>` for templates.
pub(crate) fn target_file_name(
    current: &Path,
    description: &str,
    date: &ResolvedDate,
    timezone: Timezone,
) -> String {
    let stem = match date {
        ResolvedDate::Template => format!("{TEMPLATE_PREFIX}_{description}"),
        ResolvedDate::Content { at, .. } => format!("{}_{description}", stamp(at)),
        ResolvedDate::History { at } => {
            format!("{}_{description}", history_stamp(*at, timezone))
        }
    };
    with_extension(stem, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> ResolvedDate {
        ResolvedDate::Content {
            pattern: "report date",
            at: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn dated_name_keeps_extension() {
        let name = target_file_name(
            Path::new("docs/testing/test_plan.md"),
            "Test",
            &noon(2025, 1, 21),
            Timezone::Commit,
        );
        assert_eq!(name, "20250121_1200_Test.md");
    }

    #[test]
    fn non_markdown_extension_is_preserved() {
        let name = target_file_name(
            Path::new("docs/archive/patches/app_js_patch_sidebar.txt"),
            "側邊欄補丁",
            &noon(2025, 1, 2),
            Timezone::Commit,
        );
        assert_eq!(name, "20250102_1200_側邊欄補丁.txt");
    }

    #[test]
    fn file_without_extension() {
        let name = target_file_name(
            Path::new("docs/NOTES"),
            "Notes",
            &noon(2024, 10, 9),
            Timezone::Commit,
        );
        assert_eq!(name, "20241009_1200_Notes");
    }

    #[test]
    fn template_name_has_no_date() {
        let name = target_file_name(
            Path::new("docs/changelog/change_template.md"),
            "變更記錄模板",
            &ResolvedDate::Template,
            Timezone::Commit,
        );
        assert_eq!(name, "TEMPLATE_變更記錄模板.md");
    }

    #[test]
    fn history_name_uses_commit_clock() {
        let at = DateTime::parse_from_rfc3339("2025-01-21T02:40:00+08:00").unwrap();
        let date = ResolvedDate::History { at };
        assert_eq!(
            target_file_name(Path::new("a.md"), "登入系統修復", &date, Timezone::Commit),
            "20250121_0240_登入系統修復.md"
        );
        assert_eq!(
            target_file_name(
                Path::new("a.md"),
                "登入系統修復",
                &date,
                Timezone::Named(chrono_tz::UTC)
            ),
            "20250120_1840_登入系統修復.md"
        );
    }

    #[test]
    fn template_detection() {
        assert!(is_template(Path::new("docs/changelog/change_template.md"), "x"));
        assert!(is_template(Path::new("docs/CHANGE_TEMPLATE.md"), "x"));
        assert!(is_template(Path::new("docs/a.md"), "Release Template"));
        assert!(!is_template(Path::new("docs/testing/test_plan.md"), "Test plan"));
    }
}
