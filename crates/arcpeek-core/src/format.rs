//! Display formatting collaborators.
//!
//! Pure functions consumed by node construction and the finalize pass;
//! the tree algorithms treat their output as opaque strings.

use chrono::NaiveDateTime;
use humansize::DECIMAL;

/// Format a byte count as a unit-scaled string, e.g. `"12.3 kB"`.
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, DECIMAL)
}

/// Format an archive timestamp as `yyyy-MM-dd HH:mm:ss`, or an empty
/// string when the archive stored none.
pub fn format_timestamp(modified: Option<NaiveDateTime>) -> String {
    modified
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
