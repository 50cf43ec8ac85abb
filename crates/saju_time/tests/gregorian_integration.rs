//! Integration tests for day counting across long spans.

use chrono::NaiveDate;
use saju_time::{BirthMoment, days_from_epoch, is_leap_year};

#[test]
fn matches_chrono_day_numbers() {
    // chrono counts CE days from 0001-01-01 = 1
    let samples = [
        (1, 1, 1),
        (1582, 10, 15),
        (1900, 2, 28),
        (1900, 3, 1),
        (1983, 1, 3),
        (1995, 3, 30),
        (2000, 2, 29),
        (2005, 11, 18),
        (2100, 12, 31),
        (9999, 12, 31),
    ];
    for (y, m, d) in samples {
        let date = NaiveDate::from_ymd_opt(y, m as u32, d as u32).unwrap();
        let expected = chrono::Datelike::num_days_from_ce(&date) as i64 - 1;
        assert_eq!(days_from_epoch(y, m, d), expected, "{y}-{m}-{d}");
    }
}

#[test]
fn consecutive_days_step_by_one_through_four_centuries() {
    let mut prev = days_from_epoch(1800, 1, 1);
    for year in 1800..2200 {
        for month in 1..=12 {
            let len = saju_time::days_in_month(year, month).unwrap();
            for day in 1..=len as i32 {
                if (year, month, day) == (1800, 1, 1) {
                    continue;
                }
                let n = days_from_epoch(year, month, day);
                assert_eq!(n - prev, 1, "{year}-{month}-{day}");
                prev = n;
            }
        }
    }
}

#[test]
fn leap_year_count_per_400_years() {
    let leaps = (2000..2400).filter(|&y| is_leap_year(y)).count();
    assert_eq!(leaps, 97);
}

#[test]
fn validate_agrees_with_days_in_month() {
    for month in 1..=12 {
        let len = saju_time::days_in_month(2024, month).unwrap() as i32;
        assert!(BirthMoment::new(2024, month, len, 0, 0).validate(true).is_ok());
        assert!(
            BirthMoment::new(2024, month, len + 1, 0, 0)
                .validate(true)
                .is_err()
        );
    }
}
