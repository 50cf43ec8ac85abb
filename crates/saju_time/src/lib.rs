//! Civil calendar support for the Four Pillars engine.
//!
//! This crate provides:
//! - Proleptic Gregorian day counting (constant time, total over `i32`)
//! - `BirthMoment`, the unvalidated date/time input record
//! - Parsing and optional calendar validation of birth moments

pub mod birth_moment;
pub mod error;
pub mod gregorian;

pub use birth_moment::{BirthMoment, parse_date};
pub use error::TimeError;
pub use gregorian::{MONTH_DAYS, day_difference, days_from_epoch, days_in_month, is_leap_year};
