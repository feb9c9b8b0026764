/// Date format used in progress lines: "2025-01-21"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-time format used in progress lines for history timestamps
pub(crate) const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Prefix format of a dated filename: "20250121_1200"
pub(crate) const FILENAME_STAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Prefix used for template documents instead of a date stamp
pub(crate) const TEMPLATE_PREFIX: &str = "TEMPLATE";

/// Plan file looked up in the working root when none is given
pub(crate) const DEFAULT_PLAN_FILE: &str = "docshift.toml";

/// Documentation directory `rename` expects by default
pub(crate) const DEFAULT_DOCS_DIR: &str = "docs";
