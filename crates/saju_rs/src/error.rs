//! Error type for the report layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

/// Errors from validating user input or serializing a report.
#[derive(Debug)]
#[non_exhaustive]
pub enum SajuError {
    /// Name was empty or whitespace only.
    MissingName,
    /// Date or time failed validation.
    Time(TimeError),
    /// Unrecognized gender label.
    Gender(String),
    /// JSON serialization failed.
    Json(serde_json::Error),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "name is required"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Gender(s) => write!(f, "unknown gender: {s}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for SajuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<serde_json::Error> for SajuError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
