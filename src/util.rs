use chrono::{DateTime, Utc};

/// Short month label used on chart axes, e.g. `Jan-17`.
pub fn month_label(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b-%y").to_string()
}

/// Sortable month key, e.g. `2017-01`.
pub fn month_key(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m").to_string()
}

/// Timestamp in the `YYYYMMDD HH:MM:SS` form used for time frame labels.
pub fn compact_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y%m%d %H:%M:%S").to_string()
}
