//! Calendar helpers for search dates.
//!
//! The booking form has no free-text date input; the search sequence
//! advances a one-day increment control, so travel dates are handled as
//! whole-day offsets from today. Plain calendar arithmetic, no timezones.

use chrono::NaiveDate;

/// Error returned for a date string that is not `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {reason}")]
pub struct InvalidDate {
    reason: &'static str,
}

/// Signed number of whole days from `from` to the ISO date `to_iso`.
///
/// Negative when `to_iso` is in the past relative to `from`.
pub fn days_between(from: NaiveDate, to_iso: &str) -> Result<i64, InvalidDate> {
    let to = NaiveDate::parse_from_str(to_iso, "%Y-%m-%d").map_err(|_| InvalidDate {
        reason: "expected YYYY-MM-DD",
    })?;
    Ok((to - from).num_days())
}

/// The ISO date `days` whole days after `from`.
pub fn date_after(from: NaiveDate, days: i64) -> String {
    (from + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_days_forward() {
        assert_eq!(days_between(date(2024, 1, 1), "2024-01-10").unwrap(), 9);
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(days_between(date(2024, 3, 15), "2024-03-15").unwrap(), 0);
    }

    #[test]
    fn past_dates_are_negative() {
        assert_eq!(days_between(date(2024, 3, 15), "2024-03-10").unwrap(), -5);
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        assert_eq!(days_between(date(2023, 12, 30), "2024-01-02").unwrap(), 3);
    }

    #[test]
    fn rejects_garbage() {
        assert!(days_between(date(2024, 1, 1), "not-a-date").is_err());
        assert!(days_between(date(2024, 1, 1), "2024/01/05").is_err());
        assert!(days_between(date(2024, 1, 1), "10-01-2024").is_err());
        assert!(days_between(date(2024, 1, 1), "").is_err());
    }

    #[test]
    fn formats_offsets_as_iso() {
        assert_eq!(date_after(date(2024, 1, 1), 9), "2024-01-10");
        assert_eq!(date_after(date(2024, 1, 1), 0), "2024-01-01");
        assert_eq!(date_after(date(2024, 2, 28), 2), "2024-03-01");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn date_after_round_trips_through_days_between(days in -3650i64..3650) {
            let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let iso = date_after(base, days);
            prop_assert_eq!(days_between(base, &iso).unwrap(), days);
        }

        #[test]
        fn date_after_is_always_padded_iso(days in 0i64..3650) {
            let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let iso = date_after(base, days);
            prop_assert_eq!(iso.len(), 10);
            prop_assert_eq!(iso.as_bytes()[4], b'-');
            prop_assert_eq!(iso.as_bytes()[7], b'-');
        }
    }
}
