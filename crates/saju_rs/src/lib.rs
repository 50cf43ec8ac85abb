//! High-level readings on top of the saju pillar engine.
//!
//! Takes the raw birth form, validates it and produces a serializable
//! report, the spreadsheet submission record and the share text.
//!
//! # Quick start
//!
//! ```rust
//! use saju_rs::*;
//!
//! let input = BirthInput::new("홍길동", 1995, 3, 30).with_time(5, 32);
//! let report = report_for(&input).unwrap();
//! assert_eq!(report.day_pillar_name, "경신일주");
//! ```

pub mod error;
pub mod input;
pub mod report;
pub mod share;
pub mod submission;

pub use error::SajuError;
pub use input::{BirthInput, Gender, ValidationConfig, format_birth_date, format_birth_time};
pub use report::{PillarNames, SajuReport, report_for, report_for_moment, report_for_with};
pub use share::share_message;
pub use submission::SubmissionPayload;

// Re-export engine types so callers don't need saju_base directly.
pub use saju_base::{
    BirthMoment, FourPillars, GanJi, MidnightPolicy, PillarConfig, PillarResult,
    calculate_pillars, calculate_pillars_with, verify_engine,
};
pub use saju_time::TimeError;
