use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone used to render history timestamps in filenames.
///
/// `Commit` keeps the author's own offset as recorded by git, which is what
/// the filename stamp reflects unless the user asks otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum Timezone {
    #[default]
    Commit,
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Commit);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("commit") {
            return Ok(Timezone::Commit);
        }
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn convert(self, dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Commit => dt,
            Timezone::Local => {
                let local = dt.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let zoned = dt.with_timezone(&tz);
                let offset = zoned.offset().fix();
                zoned.with_timezone(&offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn parse_none_keeps_commit_offset() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Commit));
        assert!(matches!(
            Timezone::parse(Some("")).unwrap(),
            Timezone::Commit
        ));
        assert!(matches!(
            Timezone::parse(Some("Commit")).unwrap(),
            Timezone::Commit
        ));
    }

    #[test]
    fn parse_local_and_utc() {
        assert!(matches!(
            Timezone::parse(Some("  LOCAL ")).unwrap(),
            Timezone::Local
        ));
        assert!(matches!(
            Timezone::parse(Some("z")).unwrap(),
            Timezone::Named(chrono_tz::UTC)
        ));
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Asia/Taipei")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Asia::Taipei)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn commit_zone_leaves_timestamp_alone() {
        let dt = at("2025-01-21T02:40:00+08:00");
        let out = Timezone::Commit.convert(dt);
        assert_eq!(out.format("%Y%m%d_%H%M").to_string(), "20250121_0240");
        assert_eq!(out.offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn named_zone_shifts_wall_clock() {
        let dt = at("2025-01-21T02:40:00+08:00");
        let out = Timezone::Named(chrono_tz::UTC).convert(dt);
        assert_eq!(out.format("%Y%m%d_%H%M").to_string(), "20250120_1840");
    }
}
