//! Display helpers shared by rendering front ends.

use chrono::{DateTime, Utc};

use crate::record::DisplayRecord;

/// Separator between the parts of a meta line.
pub const META_SEPARATOR: &str = " • ";

/// Message shown when the first page comes back empty.
pub const EMPTY_LIST: &str = "No submissions yet.";

/// Format a creation time, or `None` when the time is unknown (0).
pub fn created_at(secs: i64) -> Option<String> {
    if secs == 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}


/// The line under a record's title: `owner/repo • time • by submitter`,
/// leaving out whatever is missing.
pub fn meta_line(record: &DisplayRecord) -> String {
    let by = (!record.submitter.is_empty()).then(|| format!("by {}", record.submitter));

    [record.owner_repo.clone(), created_at(record.created_at), by]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(META_SEPARATOR)
}
