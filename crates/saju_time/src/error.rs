//! Error types for birth-moment parsing and calendar validation.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

/// Errors from parsing or validating a birth moment.
///
/// The pillar engine itself never produces these; they belong to the
/// input layer that sits in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string did not match `YYYY-MM-DD[Thh:mm]`.
    Format(String),
    /// A numeric field failed to parse.
    Parse(String),
    /// The date is not a real Gregorian calendar date.
    InvalidDate { year: i32, month: i32, day: i32 },
    /// Hour outside 0..=23 or minute outside 0..=59.
    InvalidTime { hour: i32, minute: i32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(s) => write!(f, "expected YYYY-MM-DDThh:mm, got {s}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time: {hour:02}:{minute:02}")
            }
        }
    }
}

impl Error for TimeError {}

impl From<ParseIntError> for TimeError {
    fn from(e: ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
