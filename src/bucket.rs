//! Placement of instants into calendar-month buckets relative to an origin.

use chrono::{DateTime, Datelike, Duration, Months, SubsecRound, Utc};

/// Smallest time step the range and bucket arithmetic distinguishes.
pub fn resolution() -> Duration {
    Duration::seconds(1)
}

/// Number of month steps a cursor starting at `origin` takes before `target`
/// is no longer strictly after it.
///
/// Yields 0 for `target <= origin`. For a month-aligned range,
/// `bucket_offset(start, end)` is the number of months spanned.
pub fn bucket_offset(origin: DateTime<Utc>, target: DateTime<Utc>) -> u32 {
    if target <= origin {
        return 0;
    }

    // Every cursor before the target's calendar month is strictly before it.
    let month_diff = (target.year() - origin.year()) * 12 + target.month() as i32 - origin.month() as i32;
    let mut steps = u32::try_from(month_diff - 1).unwrap_or(0);

    loop {
        let cursor = match origin.checked_add_months(Months::new(steps)) {
            Some(cursor) => cursor,
            None => return steps,
        };
        if target <= cursor {
            return steps;
        }
        steps += 1;
    }
}

/// 1-based slot of `timestamp` in the month buckets starting at `origin`.
///
/// The offset is taken at the end of the resolution step containing the
/// timestamp, so an instant at exactly midnight on the first of a month
/// belongs to that month. 0 means before `origin`.
pub fn month_slot(origin: DateTime<Utc>, timestamp: DateTime<Utc>) -> u32 {
    let step = timestamp.trunc_subsecs(0);
    let step_end = step.checked_add_signed(resolution()).unwrap_or(step);
    bucket_offset(origin, step_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn offset_of_origin_is_zero() {
        let origin = at(2020, 3, 1, 0, 0, 0);
        assert_eq!(bucket_offset(origin, origin), 0);
        let odd = at(1999, 12, 31, 23, 59, 59);
        assert_eq!(bucket_offset(odd, odd), 0);
    }

    #[test]
    fn saturates_for_targets_before_origin() {
        let origin = at(2020, 3, 1, 0, 0, 0);
        assert_eq!(bucket_offset(origin, at(2020, 2, 29, 23, 59, 59)), 0);
        assert_eq!(bucket_offset(origin, at(1970, 1, 1, 0, 0, 0)), 0);
    }

    #[test]
    fn counts_months_spanned_by_aligned_range() {
        let start = at(2017, 1, 1, 0, 0, 0);
        assert_eq!(bucket_offset(start, at(2017, 5, 31, 23, 59, 59)), 5);
        assert_eq!(bucket_offset(start, at(2017, 1, 31, 23, 59, 59)), 1);
        assert_eq!(bucket_offset(start, at(2017, 2, 28, 23, 59, 59)), 2);
        assert_eq!(bucket_offset(start, at(2018, 12, 31, 23, 59, 59)), 24);
    }

    #[test]
    fn monotonic_in_target() {
        let origin = at(2019, 11, 1, 0, 0, 0);
        let mut target = at(2019, 9, 15, 12, 0, 0);
        let mut last = 0;
        for _ in 0..400 {
            let offset = bucket_offset(origin, target);
            assert!(offset >= last, "offset went from {last} to {offset} at {target}");
            last = offset;
            target += Duration::hours(37);
        }
        assert!(last > 0);
    }

    #[test]
    fn month_boundaries_place_into_the_new_month() {
        let origin = at(2021, 1, 1, 0, 0, 0);
        assert_eq!(month_slot(origin, origin), 1);
        assert_eq!(month_slot(origin, at(2021, 1, 31, 23, 59, 59)), 1);
        assert_eq!(month_slot(origin, at(2021, 2, 1, 0, 0, 0)), 2);
        assert_eq!(month_slot(origin, at(2021, 2, 14, 9, 30, 0)), 2);
        assert_eq!(month_slot(origin, at(2020, 12, 31, 23, 59, 59)), 0);
        assert_eq!(month_slot(origin, at(2020, 12, 31, 23, 59, 58)), 0);
    }

    #[test]
    fn slot_agrees_with_offset_inside_a_month() {
        let origin = at(2016, 2, 1, 0, 0, 0);
        let ts = at(2016, 4, 17, 8, 0, 0);
        assert_eq!(month_slot(origin, ts), bucket_offset(origin, ts));
        assert_eq!(month_slot(origin, ts), 3);
    }

    #[test]
    fn sub_second_instants_stay_in_their_month() {
        let origin = at(2020, 1, 1, 0, 0, 0);
        let half = Duration::milliseconds(500);
        assert_eq!(month_slot(origin, origin - half), 0);
        assert_eq!(month_slot(origin, origin + half), 1);
        assert_eq!(month_slot(origin, at(2020, 1, 31, 23, 59, 59) + half), 1);
        assert_eq!(month_slot(origin, at(2020, 2, 1, 0, 0, 0) - half), 1);
        assert_eq!(month_slot(origin, at(2020, 2, 1, 0, 0, 0) + half), 2);
    }
}
