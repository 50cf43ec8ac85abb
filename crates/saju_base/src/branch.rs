//! The twelve earthly branches (지지, 地支).
//!
//! Branches name the months (Ja = the month of the winter solstice) and the
//! two-hour periods of the day (Ja = 23:00–00:59).

use std::str::FromStr;

use crate::error::CycleError;
use crate::util::wrap;

/// The 12 branches, starting from Ja (子, Rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = Ja, 11 = Hae).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl Branch {
    /// Branch for any integer, wrapping modulo 12.
    pub fn from_index(i: i64) -> Self {
        ALL_BRANCHES[wrap(i, 12) as usize]
    }

    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Hangul syllable, e.g. "신".
    pub fn name(self) -> &'static str {
        BRANCH_HANGUL[self.index() as usize]
    }

    /// Hanja character, e.g. "申".
    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    /// Zodiac animal (English).
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    /// Clock hour at which this branch's two-hour period begins (Ja = 23).
    pub const fn start_hour(self) -> u8 {
        (self.index() * 2 + 23) % 24
    }

    /// The next branch in the cycle.
    pub fn succ(self) -> Self {
        Self::from_index(self.index() as i64 + 1)
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

/// Accepts the Hangul or Hanja form.
impl FromStr for Branch {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BRANCH_HANGUL
            .iter()
            .position(|n| *n == s)
            .or_else(|| BRANCH_HANJA.iter().position(|n| *n == s))
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| CycleError::UnknownSymbol(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn start_hours() {
        assert_eq!(Branch::Ja.start_hour(), 23);
        assert_eq!(Branch::Chuk.start_hour(), 1);
        assert_eq!(Branch::Hae.start_hour(), 21);
    }

    #[test]
    fn succ_wraps() {
        assert_eq!(Branch::Hae.succ(), Branch::Ja);
        assert_eq!(Branch::Ja.succ(), Branch::Chuk);
    }

    #[test]
    fn parse_both_scripts() {
        assert_eq!("申".parse::<Branch>().unwrap(), Branch::Sin);
        assert_eq!("자".parse::<Branch>().unwrap(), Branch::Ja);
        assert!("甲".parse::<Branch>().is_err());
    }
}
