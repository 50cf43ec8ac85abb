//! Complete reading for one birth moment: pillars, labels and text.

use saju_base::{
    BirthMoment, FourPillars, PillarConfig, calculate_pillars_with, interpretation_for,
};
use serde::Serialize;
use tracing::debug;

use crate::error::SajuError;
use crate::input::{BirthInput, ValidationConfig};

/// Pillar names in Hangul and Hanja.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarNames {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub year_han: String,
    pub month_han: String,
    pub day_han: String,
    pub hour_han: String,
}

impl From<&FourPillars> for PillarNames {
    fn from(p: &FourPillars) -> Self {
        Self {
            year: p.year.name(),
            month: p.month.name(),
            day: p.day.name(),
            hour: p.hour.name(),
            year_han: p.year.hanja(),
            month_han: p.month.hanja(),
            day_han: p.day.hanja(),
            hour_han: p.hour.hanja(),
        }
    }
}

/// Everything shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuReport {
    pub pillars: PillarNames,
    /// Cycle indices, year/month/day/hour.
    pub indices: [u8; 4],
    pub is_notable_day: bool,
    /// "을해년 기묘월 경신일 기묘시".
    pub type_name: String,
    /// "경신일주".
    pub day_pillar_name: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub advice: String,
    /// Input was one of the pinned reference moments.
    pub verified: bool,
}

impl SajuReport {
    pub fn to_json(&self) -> Result<String, SajuError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Report for an already validated moment.
pub fn report_for_moment(moment: &BirthMoment, config: &PillarConfig) -> SajuReport {
    let result = calculate_pillars_with(moment, config);
    let p = &result.pillars;
    let text = interpretation_for(p.day, result.is_notable_day);
    debug!(%moment, day = %p.day, notable = result.is_notable_day, "report built");

    SajuReport {
        pillars: PillarNames::from(p),
        indices: [p.year.index(), p.month.index(), p.day.index(), p.hour.index()],
        is_notable_day: result.is_notable_day,
        type_name: p.type_label(),
        day_pillar_name: p.day_label(),
        title: text.title.to_string(),
        description: text.description.to_string(),
        keywords: text.keywords,
        advice: text.advice.to_string(),
        verified: result.matches_reference_case,
    }
}

/// Validate the form with defaults and build its report.
pub fn report_for(input: &BirthInput) -> Result<SajuReport, SajuError> {
    report_for_with(input, &ValidationConfig::default(), &PillarConfig::default())
}

/// Validate the form under `validation` and build its report under `pillars`.
pub fn report_for_with(
    input: &BirthInput,
    validation: &ValidationConfig,
    pillars: &PillarConfig,
) -> Result<SajuReport, SajuError> {
    let moment = input.validate_with(validation)?;
    Ok(report_for_moment(&moment, pillars))
}
