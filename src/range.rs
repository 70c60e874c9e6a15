//! Resolution of `YYYYMM` tokens into month-aligned time ranges.

use crate::bucket::{bucket_offset, resolution};
use crate::error::{GchartError, Result};
use crate::util::compact_timestamp;
use chrono::{DateTime, Months, NaiveDate, TimeZone, Utc};
use serde::Serialize;

/// Inclusive range from the first instant of one month to the last second of
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Number of calendar months covered, counting both ends.
    pub fn months(&self) -> u32 {
        bucket_offset(self.start, self.end)
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        timestamp >= &self.start && timestamp <= &self.end
    }

    /// First instant of the month at zero-based `index` within the range.
    pub fn month_start(&self, index: u32) -> Option<DateTime<Utc>> {
        self.start.checked_add_months(Months::new(index))
    }

    pub fn time_frame_label(&self) -> String {
        format!(
            "from {} to {}",
            compact_timestamp(&self.start),
            compact_timestamp(&self.end)
        )
    }
}

/// Resolves a start token and an optional end token into a [`TimeRange`].
///
/// A missing end token means the calendar month of `now`.
pub fn resolve_range(start: &str, end: Option<&str>, now: DateTime<Utc>) -> Result<TimeRange> {
    let start_month = parse_month_token(start)?;
    let end_month = match end {
        Some(token) => parse_month_token(token)?,
        None => parse_month_token(&now.format("%Y%m").to_string())?,
    };

    let start_dt = Utc.from_utc_datetime(&start_month.and_time(chrono::NaiveTime::MIN));
    let end_dt = end_of_month(end_month)?;

    if end_dt < start_dt {
        return Err(GchartError::InvalidDateRange {
            start: start_dt,
            end: end_dt,
        });
    }

    Ok(TimeRange {
        start: start_dt,
        end: end_dt,
    })
}

/// Parses a six character `YYYYMM` token into the first day of that month.
pub fn parse_month_token(token: &str) -> Result<NaiveDate> {
    let invalid = || GchartError::InvalidDateFormat(token.to_string());

    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = token[..4].parse().map_err(|_| invalid())?;
    let month: u32 = token[4..].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

fn end_of_month(first_day: NaiveDate) -> Result<DateTime<Utc>> {
    let next_month = first_day
        .checked_add_months(Months::new(1))
        .ok_or_else(|| GchartError::InvalidDateFormat(first_day.format("%Y%m").to_string()))?;
    let next_start = Utc.from_utc_datetime(&next_month.and_time(chrono::NaiveTime::MIN));
    Ok(next_start - resolution())
}
