//! Content date extraction
//!
//! Documents usually state when they were written somewhere near the top:
//! a bold "**日期**" / "**Date**" line, a "Report Date:" header, a "last
//! updated" footer, or a bare ISO date on its own line. The patterns below
//! are tried in order and the first one that matches decides the date, so
//! the order is part of the behaviour.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

struct DatePattern {
    name: &'static str,
    regex: Regex,
}

impl DatePattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("date pattern must compile"),
        }
    }
}

static PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        // **日期**: 2026年1月21日, **報告日期**：2025/01/20, **Date**: 2025-01-20
        DatePattern::new(
            "bold date label",
            r"\*\*(?:[日期報告]*日期[報告]*|(?:Report )?Date)\*\*[:\s：]*([0-9]{4})[-/年]([0-9]{1,2})[-/月]([0-9]{1,2})",
        ),
        DatePattern::new(
            "report date",
            r"Report Date[:\s：]*([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})",
        ),
        DatePattern::new(
            "recently updated",
            r"最近更新[:\s：]*([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})",
        ),
        DatePattern::new(
            "last updated",
            r"(?:最[後后]更新|(?i:last updated))[:\s：]*([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})",
        ),
        DatePattern::new(
            "leading iso date",
            r"(?m)^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})",
        ),
    ]
});

/// Time of day stamped on dates that come from document text
pub(crate) fn content_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

/// Find the document date in `content`.
///
/// Returns the name of the pattern that matched and the date at 12:00.
/// A match that is not a real calendar day (month 13, Feb 30) counts as no
/// date at all; later patterns are not consulted.
pub(crate) fn extract_date(content: &str) -> Option<(&'static str, NaiveDateTime)> {
    let (pattern, caps) = PATTERNS
        .iter()
        .find_map(|p| p.regex.captures(content).map(|caps| (p, caps)))?;

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some((pattern.name, date.and_time(content_time())))
}
