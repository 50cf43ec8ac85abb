//! Civil birth date/time as entered by the user.
//!
//! `BirthMoment` is unvalidated: the pillar engine accepts any
//! integers. [`BirthMoment::validate`] is the optional gate callers put in
//! front of it.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::TimeError;

/// Local civil date and time of birth, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthMoment {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl BirthMoment {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// The calendar date as a `(year, month, day)` triple.
    pub fn ymd(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// Check that the moment is a real Gregorian date and clock time.
    ///
    /// With `strict_calendar` off, only the coarse bounds (month 1..=12,
    /// day 1..=31) are enforced, so "Feb 30" passes through to the engine.
    pub fn validate(&self, strict_calendar: bool) -> Result<(), TimeError> {
        let bad_date = TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        };
        if !(1..=12).contains(&self.month) || !(1..=31).contains(&self.day) {
            return Err(bad_date);
        }
        if strict_calendar && self.to_naive_date().is_none() {
            return Err(bad_date);
        }
        if !(0..=23).contains(&self.hour) || !(0..=59).contains(&self.minute) {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
            });
        }
        Ok(())
    }

    /// Calendar date, if it exists.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }

    /// Full date-time, if both parts exist.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let hour = u32::try_from(self.hour).ok()?;
        let minute = u32::try_from(self.minute).ok()?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(self.to_naive_date()?.and_time(time))
    }

    /// `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `HH:MM`.
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<NaiveDateTime> for BirthMoment {
    fn from(dt: NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};
        Self {
            year: dt.year(),
            month: dt.month() as i32,
            day: dt.day() as i32,
            hour: dt.hour() as i32,
            minute: dt.minute() as i32,
        }
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date_string(), self.time_string())
    }
}

/// Parses `YYYY-MM-DDThh:mm`, `YYYY-MM-DD hh:mm` or `YYYY-MM-DDThh:mm:ss`
/// (seconds are dropped). Fields are not range-checked.
impl FromStr for BirthMoment {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Format(s.to_string()))?;
        let (year, month, day) = parse_date(date)?;

        let time_parts: Vec<&str> = time.split(':').collect();
        if time_parts.len() != 2 && time_parts.len() != 3 {
            return Err(TimeError::Format(s.to_string()));
        }
        let hour: i32 = time_parts[0].parse()?;
        let minute: i32 = time_parts[1].parse()?;
        Ok(Self::new(year, month, day, hour, minute))
    }
}

/// Parse `YYYY-MM-DD`, allowing a leading minus on the year.
pub fn parse_date(s: &str) -> Result<(i32, i32, i32), TimeError> {
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = body.split('-').collect();
    if parts.len() != 3 {
        return Err(TimeError::Format(s.to_string()));
    }
    let year: i32 = parts[0].parse()?;
    let month: i32 = parts[1].parse()?;
    let day: i32 = parts[2].parse()?;
    Ok((sign * year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_t_separator() {
        let m: BirthMoment = "1995-03-30T05:32".parse().unwrap();
        assert_eq!(m, BirthMoment::new(1995, 3, 30, 5, 32));
    }

    #[test]
    fn parse_space_separator_and_seconds() {
        let m: BirthMoment = "2005-11-18 23:44:10".parse().unwrap();
        assert_eq!(m, BirthMoment::new(2005, 11, 18, 23, 44));
    }

    #[test]
    fn parse_rejects_missing_time() {
        assert!(matches!(
            "1995-03-30".parse::<BirthMoment>(),
            Err(TimeError::Format(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage_number() {
        assert!(matches!(
            "1995-xx-30T05:32".parse::<BirthMoment>(),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let m = BirthMoment::new(1983, 1, 3, 10, 25);
        assert_eq!(m.to_string(), "1983-01-03T10:25");
        assert_eq!(m.to_string().parse::<BirthMoment>().unwrap(), m);
    }

    #[test]
    fn strict_validation_rejects_feb_30() {
        let m = BirthMoment::new(2023, 2, 30, 12, 0);
        assert!(m.validate(true).is_err());
        assert!(m.validate(false).is_ok());
    }

    #[test]
    fn validation_rejects_bad_clock() {
        let m = BirthMoment::new(2023, 2, 3, 24, 0);
        assert_eq!(
            m.validate(true),
            Err(TimeError::InvalidTime {
                hour: 24,
                minute: 0
            })
        );
    }

    #[test]
    fn validation_rejects_month_13_even_when_lenient() {
        let m = BirthMoment::new(2023, 13, 1, 0, 0);
        assert!(m.validate(false).is_err());
    }

    #[test]
    fn naive_datetime_conversion() {
        let m = BirthMoment::new(2024, 2, 29, 23, 59);
        let dt = m.to_naive_datetime().unwrap();
        assert_eq!(BirthMoment::from(dt), m);
        assert!(BirthMoment::new(2023, 2, 29, 0, 0).to_naive_date().is_none());
    }
}
