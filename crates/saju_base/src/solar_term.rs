//! Month boundaries from the twelve "jeol" solar terms (절기, 節氣).
//!
//! Each boundary is pinned to a fixed civil date rather than the true
//! solar-longitude crossing, so results can be off by a day near a
//! boundary in some years. The table is kept as-is for stable output.

use crate::branch::Branch;

/// The 12 solar terms that open a month branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarTerm {
    Sohan,
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
}

impl SolarTerm {
    /// Hangul name, e.g. "입춘".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sohan => "소한",
            Self::Ipchun => "입춘",
            Self::Gyeongchip => "경칩",
            Self::Cheongmyeong => "청명",
            Self::Ipha => "입하",
            Self::Mangjong => "망종",
            Self::Soseo => "소서",
            Self::Ipchu => "입추",
            Self::Baengno => "백로",
            Self::Hallo => "한로",
            Self::Ipdong => "입동",
            Self::Daeseol => "대설",
        }
    }

    /// Hanja name, e.g. "立春".
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Sohan => "小寒",
            Self::Ipchun => "立春",
            Self::Gyeongchip => "驚蟄",
            Self::Cheongmyeong => "清明",
            Self::Ipha => "立夏",
            Self::Mangjong => "芒種",
            Self::Soseo => "小暑",
            Self::Ipchu => "立秋",
            Self::Baengno => "白露",
            Self::Hallo => "寒露",
            Self::Ipdong => "立冬",
            Self::Daeseol => "大雪",
        }
    }
}

/// One row of the boundary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermBoundary {
    pub term: SolarTerm,
    /// Civil month of the boundary (1..=12).
    pub month: i32,
    /// Civil day the term starts on.
    pub day: i32,
    /// Month branch in force from this date.
    pub branch: Branch,
}

const fn boundary(term: SolarTerm, month: i32, day: i32, branch: Branch) -> SolarTermBoundary {
    SolarTermBoundary {
        term,
        month,
        day,
        branch,
    }
}

/// Boundaries in calendar order.
pub static SOLAR_TERM_TABLE: [SolarTermBoundary; 12] = [
    boundary(SolarTerm::Sohan, 1, 5, Branch::Chuk),
    boundary(SolarTerm::Ipchun, 2, 4, Branch::In),
    boundary(SolarTerm::Gyeongchip, 3, 5, Branch::Myo),
    boundary(SolarTerm::Cheongmyeong, 4, 5, Branch::Jin),
    boundary(SolarTerm::Ipha, 5, 5, Branch::Sa),
    boundary(SolarTerm::Mangjong, 6, 5, Branch::O),
    boundary(SolarTerm::Soseo, 7, 7, Branch::Mi),
    boundary(SolarTerm::Ipchu, 8, 7, Branch::Sin),
    boundary(SolarTerm::Baengno, 9, 7, Branch::Yu),
    boundary(SolarTerm::Hallo, 10, 8, Branch::Sul),
    boundary(SolarTerm::Ipdong, 11, 7, Branch::Hae),
    boundary(SolarTerm::Daeseol, 12, 7, Branch::Ja),
];

/// Lichun (입춘), the year rollover, as `(month, day)`.
pub const LICHUN: (i32, i32) = (2, 4);

fn on_or_after(month: i32, day: i32, b: &SolarTermBoundary) -> bool {
    month > b.month || (month == b.month && day >= b.day)
}

/// The boundary in force on `(month, day)`.
///
/// Dates before the first boundary of the year fall under the previous
/// year's last boundary (Daeseol, the Ja month).
pub fn active_boundary(month: i32, day: i32) -> &'static SolarTermBoundary {
    SOLAR_TERM_TABLE
        .iter()
        .rev()
        .find(|b| on_or_after(month, day, b))
        .unwrap_or(&SOLAR_TERM_TABLE[SOLAR_TERM_TABLE.len() - 1])
}

/// Month branch for a civil date.
pub fn month_branch(month: i32, day: i32) -> Branch {
    active_boundary(month, day).branch
}

/// Whether `(month, day)` is on or after lichun.
pub fn is_after_lichun(month: i32, day: i32) -> bool {
    let (m, d) = LICHUN;
    month > m || (month == m && day >= d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered() {
        for w in SOLAR_TERM_TABLE.windows(2) {
            assert!((w[0].month, w[0].day) < (w[1].month, w[1].day));
        }
    }

    #[test]
    fn branches_follow_each_other() {
        for w in SOLAR_TERM_TABLE.windows(2) {
            assert_eq!(w[0].branch.succ(), w[1].branch);
        }
    }

    #[test]
    fn new_year_before_sohan_is_ja() {
        assert_eq!(month_branch(1, 1), Branch::Ja);
        assert_eq!(month_branch(1, 4), Branch::Ja);
        assert_eq!(active_boundary(1, 4).term, SolarTerm::Daeseol);
    }

    #[test]
    fn sohan_opens_chuk() {
        assert_eq!(month_branch(1, 5), Branch::Chuk);
    }

    #[test]
    fn march_30_is_myo() {
        assert_eq!(month_branch(3, 30), Branch::Myo);
    }

    #[test]
    fn december_after_daeseol_is_ja() {
        assert_eq!(month_branch(12, 6), Branch::Hae);
        assert_eq!(month_branch(12, 7), Branch::Ja);
        assert_eq!(month_branch(12, 31), Branch::Ja);
    }

    #[test]
    fn lichun_boundary() {
        assert!(!is_after_lichun(2, 3));
        assert!(is_after_lichun(2, 4));
        assert!(!is_after_lichun(1, 31));
        assert!(is_after_lichun(3, 1));
    }

    #[test]
    fn out_of_range_months_do_not_panic() {
        assert_eq!(month_branch(0, 0), Branch::Ja);
        assert_eq!(month_branch(13, 1), Branch::Ja);
        assert_eq!(month_branch(-5, 40), Branch::Ja);
    }

    #[test]
    fn names() {
        assert_eq!(SolarTerm::Ipchun.name(), "입춘");
        assert_eq!(SolarTerm::Ipchun.hanja(), "立春");
    }
}
