//! Proleptic Gregorian day counting.
//!
//! Days are counted from 0001-01-01 (day 0). The count is computed in
//! closed form so that it stays constant-time for any `i32` year, and it
//! accepts out-of-range months and days without complaint: a day of 31 in
//! a 30-day month simply lands on the first of the next month.
//!
//! Years before 1 contribute no whole-year days, so 0000-01-01 and
//! -0005-01-01 both count as day 0. The count is only continuous from
//! year 1 onward.

/// Days per month in a common year.
pub const MONTH_DAYS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year iff divisible by 4 and not by 100, or divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Number of days in a calendar month, or `None` if `month` is not 1..=12.
pub const fn days_in_month(year: i32, month: i32) -> Option<i64> {
    if month < 1 || month > 12 {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        return Some(29);
    }
    Some(MONTH_DAYS[(month - 1) as usize])
}

/// Days in all whole years before `year`, counted from year 1. Zero for
/// `year <= 1`.
fn days_before_year(year: i32) -> i64 {
    let y = (year as i64 - 1).max(0);
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Days in the months before `month` within `year`.
///
/// Months below 1 contribute nothing; months above 12 saturate at a full year.
fn days_before_month(year: i32, month: i32) -> i64 {
    let whole = (month as i64 - 1).clamp(0, 12) as usize;
    let mut days: i64 = MONTH_DAYS[..whole].iter().sum();
    if whole > 1 && is_leap_year(year) {
        days += 1;
    }
    days
}

/// Day number of `(year, month, day)` with 0001-01-01 as day 0.
pub fn days_from_epoch(year: i32, month: i32, day: i32) -> i64 {
    days_before_year(year) + days_before_month(year, month) + day as i64 - 1
}

/// Signed day difference `to - from`.
pub fn day_difference(from: (i32, i32, i32), to: (i32, i32, i32)) -> i64 {
    days_from_epoch(to.0, to.1, to.2) - days_from_epoch(from.0, from.1, from.2)
}
