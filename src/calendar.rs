//! Calendar primitives the layout engine is written against.
//!
//! Thin wrappers over `chrono::NaiveDate`. Arithmetic is checked: shifting a
//! date past chrono's supported range yields [`WheelError::DateOutOfRange`]
//! instead of panicking.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::errors::WheelError;

pub const DAYS_PER_WEEK: i64 = 7;

/// `date + days` (negative `days` moves backwards).
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, WheelError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(WheelError::DateOutOfRange { date, days })
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> Result<NaiveDate, WheelError> {
    add_days(date, weeks * DAYS_PER_WEEK)
}

pub fn sub_weeks(date: NaiveDate, weeks: i64) -> Result<NaiveDate, WheelError> {
    add_weeks(date, -weeks)
}

/// Day of the year, 1-based (`1..=366`).
#[inline]
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Day of the month, 1-based (`1..=31`).
#[inline]
pub fn day(date: NaiveDate) -> u32 {
    date.day()
}

/// Month, 0-based (`0..=11`).
#[inline]
pub fn month0(date: NaiveDate) -> u32 {
    date.month0()
}

/// Whether `date` falls in a leap year.
#[inline]
pub fn is_leap_year(date: NaiveDate) -> bool {
    date.leap_year()
}

/// Number of days in the month containing `date`.
#[inline]
pub fn days_in_month(date: NaiveDate) -> u32 {
    u32::from(date.num_days_in_month())
}

/// Whole days from `other` to `date` (`date - other`).
#[inline]
pub fn diff_days(date: NaiveDate, other: NaiveDate) -> i64 {
    date.signed_duration_since(other).num_days()
}

/// Whole weeks from `other` to `date`, truncated toward zero.
#[inline]
pub fn diff_weeks(date: NaiveDate, other: NaiveDate) -> i64 {
    diff_days(date, other) / DAYS_PER_WEEK
}

#[inline]
pub fn is_same_day(date: NaiveDate, other: NaiveDate) -> bool {
    date == other
}

/// Full English month name, e.g. `"January"`.
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn days_in_month_handles_leap_february() {
        assert_eq!(days_in_month(d(2024, 2, 10)), 29);
        assert_eq!(days_in_month(d(2023, 2, 10)), 28);
        assert_eq!(days_in_month(d(1900, 2, 1)), 28);
        assert_eq!(days_in_month(d(2000, 2, 1)), 29);
        assert_eq!(days_in_month(d(2024, 4, 30)), 30);
        assert_eq!(days_in_month(d(2024, 12, 31)), 31);
    }

    #[test]
    fn leap_years_follow_the_gregorian_rule() {
        assert!(is_leap_year(d(2024, 7, 1)));
        assert!(is_leap_year(d(2000, 1, 1)));
        assert!(!is_leap_year(d(1900, 1, 1)));
        assert!(!is_leap_year(d(2100, 12, 31)));
        assert!(!is_leap_year(d(2023, 2, 28)));
    }

    #[test]
    fn day_of_year_resets_at_new_year() {
        assert_eq!(day_of_year(d(2023, 12, 31)), 365);
        assert_eq!(day_of_year(d(2024, 12, 31)), 366);
        assert_eq!(day_of_year(d(2025, 1, 1)), 1);
    }

    #[test]
    fn week_arithmetic() {
        let lmp = d(2024, 1, 1);
        assert_eq!(add_weeks(lmp, 2).unwrap(), d(2024, 1, 15));
        assert_eq!(add_weeks(lmp, 44).unwrap(), d(2024, 11, 4));
        assert_eq!(sub_weeks(d(2024, 3, 11), 10).unwrap(), lmp);
    }

    #[test]
    fn diff_weeks_truncates_toward_zero() {
        let base = d(2024, 1, 15);
        assert_eq!(diff_weeks(d(2024, 1, 28), base), 1);
        assert_eq!(diff_weeks(d(2024, 1, 29), base), 2);
        assert_eq!(diff_weeks(d(2024, 1, 9), base), 0);
        assert_eq!(diff_days(d(2024, 1, 9), base), -6);
    }

    #[test]
    fn month_fields() {
        let date = d(2024, 12, 31);
        assert_eq!(day(date), 31);
        assert_eq!(month0(date), 11);
        assert_eq!(month_name(date), "December");
        assert!(is_same_day(date, d(2024, 12, 31)));
    }

    #[test]
    fn overflow_is_an_error() {
        let err = add_days(NaiveDate::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            WheelError::DateOutOfRange {
                date: NaiveDate::MAX,
                days: 1
            }
        );
    }
}
