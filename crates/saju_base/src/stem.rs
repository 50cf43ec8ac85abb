//! The ten heavenly stems (천간, 天干).
//!
//! Stems pair up by element: Gap/Eul are wood, Byeong/Jeong fire,
//! Mu/Gi earth, Gyeong/Sin metal, Im/Gye water. Even indices are yang.

use std::str::FromStr;

use crate::error::CycleError;
use crate::util::wrap;

/// The 10 stems, starting from Gap (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = Gap, 9 = Gye).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Five phases (오행, 五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Hangul name (목, 화, 토, 금, 수).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Hanja name (木, 火, 土, 金, 水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

impl Stem {
    /// Stem for any integer, wrapping modulo 10.
    pub fn from_index(i: i64) -> Self {
        ALL_STEMS[wrap(i, 10) as usize]
    }

    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Hangul syllable, e.g. "경".
    pub fn name(self) -> &'static str {
        STEM_HANGUL[self.index() as usize]
    }

    /// Hanja character, e.g. "庚".
    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Stem name with its element, e.g. "경금".
    pub fn element_name(self) -> String {
        format!("{}{}", self.name(), self.element().name())
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

/// Accepts the Hangul or Hanja form.
impl FromStr for Stem {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STEM_HANGUL
            .iter()
            .position(|n| *n == s)
            .or_else(|| STEM_HANJA.iter().position(|n| *n == s))
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| CycleError::UnknownSymbol(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(6), Stem::Gyeong);
        assert_eq!(Stem::from_index(16), Stem::Gyeong);
        assert_eq!(Stem::from_index(-1), Stem::Gye);
    }

    #[test]
    fn element_pairs() {
        assert_eq!(Stem::Gyeong.element(), Element::Metal);
        assert_eq!(Stem::Gye.element(), Element::Water);
        assert_eq!(Stem::Gyeong.element_name(), "경금");
    }

    #[test]
    fn polarity_alternates() {
        assert!(Stem::Gap.is_yang());
        assert!(!Stem::Eul.is_yang());
    }

    #[test]
    fn parse_both_scripts() {
        assert_eq!("庚".parse::<Stem>().unwrap(), Stem::Gyeong);
        assert_eq!("신".parse::<Stem>().unwrap(), Stem::Sin);
        assert!("子".parse::<Stem>().is_err());
    }
}
