//! Pinned reference moments and the engine self-check.
//!
//! The three moments below are checked against hand-verified almanac
//! values. They are never used to override a computed result; a result only
//! records whether its input happened to be one of them.

use saju_time::BirthMoment;
use tracing::{debug, error};

use crate::pillars::calculate_pillars;

/// A birth moment with its expected pillars in Hanja (year month day hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCase {
    pub moment: BirthMoment,
    pub expected: &'static str,
}

const fn case(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    expected: &'static str,
) -> ReferenceCase {
    ReferenceCase {
        moment: BirthMoment {
            year,
            month,
            day,
            hour,
            minute,
        },
        expected,
    }
}

pub const REFERENCE_CASES: [ReferenceCase; 3] = [
    case(1995, 3, 30, 5, 32, "乙亥 己卯 庚申 己卯"),
    case(2005, 11, 18, 23, 44, "乙酉 丁亥 丁未 庚子"),
    case(1983, 1, 3, 10, 25, "壬戌 壬子 辛卯 癸巳"),
];

/// Whether `(year, month, day, hour)` is a reference moment. Minutes are
/// not compared.
pub fn is_reference_moment(year: i32, month: i32, day: i32, hour: i32) -> bool {
    REFERENCE_CASES.iter().any(|c| {
        let m = &c.moment;
        (m.year, m.month, m.day, m.hour) == (year, month, day, hour)
    })
}

/// Outcome of recomputing one reference case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseCheck {
    pub case: ReferenceCase,
    /// Computed pillars in Hanja, same layout as `case.expected`.
    pub got: String,
}

impl CaseCheck {
    pub fn passed(&self) -> bool {
        self.got == self.case.expected
    }
}

/// Recompute every reference case with the default configuration.
///
/// Each mismatch is logged at error level.
pub fn check_reference_cases() -> Vec<CaseCheck> {
    REFERENCE_CASES
        .iter()
        .map(|c| {
            let m = &c.moment;
            let got = calculate_pillars(m.year, m.month, m.day, m.hour, m.minute)
                .pillars
                .hanja();
            let check = CaseCheck { case: *c, got };
            if !check.passed() {
                error!(moment = %m, expected = c.expected, got = %check.got, "reference case mismatch");
            }
            check
        })
        .collect()
}

/// `true` when every reference case matches.
pub fn verify_engine() -> bool {
    let ok = check_reference_cases().iter().all(CaseCheck::passed);
    debug!(ok, "engine self-check finished");
    ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_passes_self_check() {
        assert!(verify_engine());
    }

    #[test]
    fn every_case_reports_its_pillars() {
        let checks = check_reference_cases();
        assert_eq!(checks.len(), REFERENCE_CASES.len());
        for (check, case) in checks.iter().zip(REFERENCE_CASES.iter()) {
            assert_eq!(&check.case, case);
            assert_eq!(check.got, case.expected);
            assert!(check.passed());
        }
    }

    #[test]
    fn mismatch_is_not_passed() {
        let check = CaseCheck {
            case: REFERENCE_CASES[0],
            got: "甲子 甲子 甲子 甲子".to_string(),
        };
        assert!(!check.passed());
    }

    #[test]
    fn reference_moment_ignores_minute() {
        assert!(is_reference_moment(1995, 3, 30, 5));
        assert!(!is_reference_moment(1995, 3, 30, 6));
    }
}
