mod format;
mod json;
mod progress;
mod summary;

pub(crate) use json::output_report_json;
pub(crate) use progress::{ProgressOptions, print_entry};
pub(crate) use summary::print_summary;
