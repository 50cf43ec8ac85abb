//! Sexagenary-cycle calendar and Four Pillars engine.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches and the 60-term cycle
//! - A fixed-date solar-term table for month branches
//! - The pillar engine (year, month, day, hour)
//! - Interpretation text keyed by the day pillar
//!
//! Everything here is pure and synchronous. Tables are `const` data.

pub mod branch;
pub mod error;
pub mod ganji;
pub mod interpretation;
pub mod pillars;
pub mod reference;
pub mod solar_term;
pub mod stem;
pub mod util;

pub use branch::{ALL_BRANCHES, Branch};
pub use error::CycleError;
pub use ganji::{CYCLE_LEN, GYEONGSIN, GanJi};
pub use interpretation::{Interpretation, interpretation_for, lookup_interpretation};
pub use pillars::{
    ALL_PILLAR_KINDS, FourPillars, MidnightPolicy, PillarConfig, PillarKind, PillarResult,
    REFERENCE_ANCHOR, ReferenceAnchor, calculate_pillars, calculate_pillars_with, day_pillar,
    hour_branch, hour_pillar, month_pillar, year_pillar,
};
pub use reference::{
    CaseCheck, REFERENCE_CASES, ReferenceCase, check_reference_cases, is_reference_moment,
    verify_engine,
};
pub use solar_term::{
    LICHUN, SOLAR_TERM_TABLE, SolarTerm, SolarTermBoundary, active_boundary, is_after_lichun,
    month_branch,
};
pub use stem::{ALL_STEMS, Element, Stem};

pub use saju_time::BirthMoment;
