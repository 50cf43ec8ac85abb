//! Form input and its validation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use saju_time::{BirthMoment, TimeError};
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// Respondent gender as recorded in submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Korean label: 남 or 여.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" => Ok(Self::Male),
            "female" | "f" | "여" => Ok(Self::Female),
            other => Err(SajuError::Gender(other.to_string())),
        }
    }
}

/// Validation knobs for [`BirthInput::validate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Reject dates that do not exist in their month (e.g. Feb 30).
    pub strict_calendar: bool,
    /// Hour used when the form leaves it blank.
    pub default_hour: i32,
    /// Minute used when the form leaves it blank.
    pub default_minute: i32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_calendar: true,
            default_hour: 12,
            default_minute: 0,
        }
    }
}

/// Raw birth form: name, date, optional time, gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub name: String,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub gender: Gender,
}

impl BirthInput {
    pub fn new(name: impl Into<String>, year: i32, month: i32, day: i32) -> Self {
        Self {
            name: name.into(),
            year,
            month,
            day,
            hour: None,
            minute: None,
            gender: Gender::default(),
        }
    }

    pub fn with_time(mut self, hour: i32, minute: i32) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Trimmed display name.
    pub fn display_name(&self) -> &str {
        self.name.trim()
    }

    /// Validate with [`ValidationConfig::default`].
    pub fn validate(&self) -> Result<BirthMoment, SajuError> {
        self.validate_with(&ValidationConfig::default())
    }

    /// Check the form and resolve it to a [`BirthMoment`].
    ///
    /// Blank hour/minute fall back to the configured defaults before the
    /// time range check.
    pub fn validate_with(&self, config: &ValidationConfig) -> Result<BirthMoment, SajuError> {
        if self.display_name().is_empty() {
            return Err(SajuError::MissingName);
        }
        let moment = BirthMoment::new(
            self.year,
            self.month,
            self.day,
            self.hour.unwrap_or(config.default_hour),
            self.minute.unwrap_or(config.default_minute),
        );
        moment
            .validate(config.strict_calendar)
            .map_err(SajuError::from)?;
        Ok(moment)
    }
}

/// `YYYY-MM-DD`, zero padded.
pub fn format_birth_date(year: i32, month: i32, day: i32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// `HH:MM`, zero padded.
pub fn format_birth_time(hour: i32, minute: i32) -> String {
    format!("{hour:02}:{minute:02}")
}
