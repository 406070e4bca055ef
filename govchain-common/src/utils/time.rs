use chrono::{DateTime, Utc};

/// Milliseconds in one day, the unit used for voting windows.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Returns the current wall-clock time in UTC.
///
/// Engine functions never call this themselves; callers pass `now`
/// explicitly so the results stay deterministic under test.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Whole days from `from` until `to`, rounded up.
///
/// A partial day counts as a full one, so one millisecond left is `1`.
/// Zero or a negative value means `to` is not in the future.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let millis = (to - from).num_milliseconds();
    // ceil for integer division, valid for both signs
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_days_between_whole_days() {
        assert_eq!(days_between(base(), base() + Duration::days(7)), 7);
    }

    #[test]
    fn test_days_between_rounds_partial_day_up() {
        assert_eq!(days_between(base(), base() + Duration::milliseconds(1)), 1);
        assert_eq!(days_between(base(), base() + Duration::hours(36)), 2);
    }

    #[test]
    fn test_days_between_past_is_not_positive() {
        assert_eq!(days_between(base(), base()), 0);
        assert_eq!(days_between(base(), base() - Duration::hours(12)), 0);
        assert_eq!(days_between(base(), base() - Duration::days(3)), -3);
    }

    #[test]
    fn test_now_is_after_epoch() {
        assert!(now().timestamp() > 0, "Timestamp should be greater than zero");
    }
}
