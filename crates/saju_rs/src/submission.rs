//! Denormalized record of one reading, as forwarded to a spreadsheet.
//!
//! Only the payload is built here. Transport belongs to the caller.

use chrono::{DateTime, SecondsFormat, Utc};
use saju_base::BirthMoment;
use serde::{Deserialize, Serialize};

use crate::error::SajuError;
use crate::input::{BirthInput, format_birth_date, format_birth_time};
use crate::report::SajuReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// `HH:MM`, after defaults were applied.
    pub birth_time: String,
    /// 남 or 여.
    pub gender: String,
    pub result_type: String,
    pub result_title: String,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
}

impl SubmissionPayload {
    /// Build the payload stamped with `at`.
    pub fn build(
        input: &BirthInput,
        moment: &BirthMoment,
        report: &SajuReport,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: input.display_name().to_string(),
            birth_date: format_birth_date(moment.year, moment.month, moment.day),
            birth_time: format_birth_time(moment.hour, moment.minute),
            gender: input.gender.label().to_string(),
            result_type: report.type_name.clone(),
            result_title: report.title.clone(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Build the payload stamped with the current time.
    pub fn now(input: &BirthInput, moment: &BirthMoment, report: &SajuReport) -> Self {
        Self::build(input, moment, report, Utc::now())
    }

    pub fn to_json(&self) -> Result<String, SajuError> {
        Ok(serde_json::to_string(self)?)
    }
}
