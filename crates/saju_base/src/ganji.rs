//! Sexagenary (60-term) cycle positions (육십갑자, 六十甲子).
//!
//! Index `i` pairs stem `i mod 10` with branch `i mod 12`. Only stem/branch
//! pairs of equal parity occur; for those the inverse is
//! `(stem*6 - branch*5) mod 60`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::error::CycleError;
use crate::stem::Stem;
use crate::util::cycle_60;

/// A position in the 60-term cycle, always in [0, 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GanJi(u8);

/// Number of positions in the cycle.
pub const CYCLE_LEN: u8 = 60;

/// 庚申, index 56.
pub const GYEONGSIN: GanJi = GanJi(56);

impl GanJi {
    /// Position for any integer, wrapping modulo 60.
    pub fn from_index(i: i64) -> Self {
        Self(cycle_60(i))
    }

    /// Position for an index that must already be in [0, 60).
    pub fn try_from_index(i: i64) -> Result<Self, CycleError> {
        if (0..CYCLE_LEN as i64).contains(&i) {
            Ok(Self(i as u8))
        } else {
            Err(CycleError::IndexOutOfRange(i))
        }
    }

    /// Combine a stem and branch, rejecting pairs of mixed parity.
    pub fn from_stem_branch(stem: Stem, branch: Branch) -> Result<Self, CycleError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(CycleError::ParityMismatch {
                stem: stem.index(),
                branch: branch.index(),
            });
        }
        Ok(Self::combine(stem, branch))
    }

    /// The pairing formula itself. Callers guarantee equal parity.
    pub(crate) fn combine(stem: Stem, branch: Branch) -> Self {
        let raw = stem.index() as i64 * 6 - branch.index() as i64 * 5 + 60;
        Self::from_index(raw)
    }

    /// 0-based index (甲子=0 .. 癸亥=59).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based order in the cycle (1..=60).
    pub const fn order(self) -> u8 {
        self.0 + 1
    }

    pub fn stem(self) -> Stem {
        Stem::from_index(self.0 as i64)
    }

    pub fn branch(self) -> Branch {
        Branch::from_index(self.0 as i64)
    }

    /// Hangul name, e.g. "경신".
    pub fn name(self) -> String {
        format!("{}{}", self.stem().name(), self.branch().name())
    }

    /// Hanja name, e.g. "庚申".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem().hanja(), self.branch().hanja())
    }

    /// Position `n` steps later (negative steps go back).
    pub fn offset(self, n: i64) -> Self {
        Self::from_index(self.0 as i64 + n)
    }

    /// All 60 positions in order.
    pub fn all() -> impl Iterator<Item = GanJi> {
        (0..CYCLE_LEN).map(GanJi)
    }
}

impl Display for GanJi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hanja())
    }
}

impl Serialize for GanJi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts a two-character name in Hangul ("경신") or Hanja ("庚申"),
/// or a plain index ("56").
impl FromStr for GanJi {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Self::try_from_index(i);
        }
        let mut chars = s.chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CycleError::UnknownSymbol(s.to_string()));
        };
        let stem: Stem = a.to_string().parse()?;
        let branch: Branch = b.to_string().parse()?;
        Self::from_stem_branch(stem, branch)
    }
}
