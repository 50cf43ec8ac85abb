//! Four Pillars (사주, 四柱) from a civil birth moment.
//!
//! Each pillar is a position in the 60-term cycle:
//! - Day: days elapsed since a reference date whose day pillar is known.
//! - Year: calendar year, rolled back by one before lichun (Feb 4).
//! - Month: branch from the solar-term table, stem from the year stem
//!   ("five tigers" rule).
//! - Hour: branch from the clock hour, stem from the day stem
//!   ("five rats" rule).
//!
//! The computation is total over `i32` inputs. Nothing is range-checked;
//! callers that want calendar validation do it before calling in.

use saju_time::{BirthMoment, day_difference};
use serde::Serialize;
use tracing::trace;

use crate::branch::Branch;
use crate::ganji::{GYEONGSIN, GanJi};
use crate::reference::is_reference_moment;
use crate::solar_term::{is_after_lichun, month_branch};
use crate::stem::Stem;

/// A date whose day and year pillars are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAnchor {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Day pillar index on the anchor date.
    pub day_index: u8,
    /// Year pillar index of the anchor's sexagenary year (after lichun).
    pub year_index: u8,
}

/// 1995-03-30: 庚申 day (56) in the 乙亥 year (11).
pub const REFERENCE_ANCHOR: ReferenceAnchor = ReferenceAnchor {
    year: 1995,
    month: 3,
    day: 30,
    day_index: 56,
    year_index: 11,
};

/// Stem of the In (Tiger) month, indexed by `year_stem mod 5`.
const FIVE_TIGERS: [u8; 5] = [2, 4, 6, 8, 0];

/// Stem of the Ja (Rat) hour, indexed by `day_stem mod 5`.
const FIVE_RATS: [u8; 5] = [0, 2, 4, 6, 8];

/// Which day the 23:00–23:59 Rat hour belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MidnightPolicy {
    /// The day changes at 23:00: the day pillar advances and the hour stem
    /// follows the new day.
    #[default]
    NextDay,
    /// The day changes at 00:00; 23:00 keeps the calendar day.
    SameDay,
}

/// Engine options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PillarConfig {
    pub midnight: MidnightPolicy,
}

/// The four pillar slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarKind {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarKind {
    /// Korean unit suffix used in labels (년, 월, 일, 시).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Year => "년",
            Self::Month => "월",
            Self::Day => "일",
            Self::Hour => "시",
        }
    }
}

/// All four slots in display order.
pub const ALL_PILLAR_KINDS: [PillarKind; 4] = [
    PillarKind::Year,
    PillarKind::Month,
    PillarKind::Day,
    PillarKind::Hour,
];

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: GanJi,
    pub month: GanJi,
    pub day: GanJi,
    pub hour: GanJi,
}

impl FourPillars {
    pub fn get(&self, kind: PillarKind) -> GanJi {
        match kind {
            PillarKind::Year => self.year,
            PillarKind::Month => self.month,
            PillarKind::Day => self.day,
            PillarKind::Hour => self.hour,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PillarKind, GanJi)> + '_ {
        ALL_PILLAR_KINDS.iter().map(move |&k| (k, self.get(k)))
    }

    /// Hanja names separated by spaces, e.g. "乙亥 己卯 庚申 己卯".
    pub fn hanja(&self) -> String {
        self.iter()
            .map(|(_, p)| p.hanja())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Hangul names separated by spaces, e.g. "을해 기묘 경신 기묘".
    pub fn names(&self) -> String {
        self.iter()
            .map(|(_, p)| p.name())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "을해년 기묘월 경신일 기묘시".
    pub fn type_label(&self) -> String {
        self.iter()
            .map(|(k, p)| format!("{}{}", p.name(), k.suffix()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "경신일주".
    pub fn day_label(&self) -> String {
        format!("{}일주", self.day.name())
    }
}

/// Engine output for one birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarResult {
    pub moment: BirthMoment,
    pub pillars: FourPillars,
    /// Day pillar is 庚申.
    pub is_notable_day: bool,
    /// `(year, month, day, hour)` is one of the pinned reference moments.
    pub matches_reference_case: bool,
}

/// Day pillar for a calendar date, ignoring time of day.
pub fn day_pillar(year: i32, month: i32, day: i32) -> GanJi {
    let a = &REFERENCE_ANCHOR;
    let diff = day_difference((a.year, a.month, a.day), (year, month, day));
    GanJi::from_index(a.day_index as i64 + diff)
}

/// Year pillar, switching at lichun rather than Jan 1.
pub fn year_pillar(year: i32, month: i32, day: i32) -> GanJi {
    let a = &REFERENCE_ANCHOR;
    let sexagenary_year = if is_after_lichun(month, day) {
        year as i64
    } else {
        year as i64 - 1
    };
    GanJi::from_index(a.year_index as i64 + sexagenary_year - a.year as i64)
}

/// Month pillar from the year pillar and the solar-term branch.
pub fn month_pillar(year_pillar: GanJi, month: i32, day: i32) -> GanJi {
    let branch = month_branch(month, day);
    let base = FIVE_TIGERS[(year_pillar.stem().index() % 5) as usize];
    let months_since_tiger = (branch.index() as i64 - 2).rem_euclid(12);
    let stem = Stem::from_index(base as i64 + months_since_tiger);
    GanJi::combine(stem, branch)
}

/// Hour branch: Ja covers 23:00–00:59, then two-hour steps.
pub fn hour_branch(hour: i32) -> Branch {
    if hour == 0 {
        return Branch::Ja;
    }
    Branch::from_index((hour as i64 + 1).div_euclid(2))
}

/// Hour pillar from the day pillar and the clock hour.
pub fn hour_pillar(day_pillar: GanJi, hour: i32) -> GanJi {
    let branch = hour_branch(hour);
    let base = FIVE_RATS[(day_pillar.stem().index() % 5) as usize];
    let stem = Stem::from_index(base as i64 + branch.index() as i64);
    GanJi::combine(stem, branch)
}

/// Four pillars with the default configuration.
///
/// `minute` does not affect any pillar; it is carried through for display.
pub fn calculate_pillars(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> PillarResult {
    let moment = BirthMoment::new(year, month, day, hour, minute);
    calculate_pillars_with(&moment, &PillarConfig::default())
}

/// Four pillars for `moment` under `config`.
pub fn calculate_pillars_with(moment: &BirthMoment, config: &PillarConfig) -> PillarResult {
    let BirthMoment {
        year,
        month,
        day,
        hour,
        ..
    } = *moment;

    let year_p = year_pillar(year, month, day);
    let month_p = month_pillar(year_p, month, day);
    let mut day_p = day_pillar(year, month, day);
    if hour == 23 && config.midnight == MidnightPolicy::NextDay {
        day_p = day_p.offset(1);
    }
    let hour_p = hour_pillar(day_p, hour);

    let pillars = FourPillars {
        year: year_p,
        month: month_p,
        day: day_p,
        hour: hour_p,
    };
    trace!(%moment, pillars = %pillars.hanja(), "pillars computed");

    PillarResult {
        moment: *moment,
        pillars,
        is_notable_day: day_p == GYEONGSIN,
        matches_reference_case: is_reference_moment(year, month, day, hour),
    }
}
