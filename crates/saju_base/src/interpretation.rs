//! Descriptive text keyed by the day pillar (일주).

use serde::Serialize;

use crate::branch::Branch;
use crate::ganji::GanJi;
use crate::stem::Stem;

/// Display text for a day pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: Vec<String>,
    pub advice: &'static str,
}

/// Title per day stem, 甲 through 癸.
const STEM_TITLES: [&str; 10] = [
    "늘 푸른 대나무",
    "바람에 흔들리는 등나무",
    "밝은 태양",
    "따뜻한 등불",
    "넓은 산과 대지",
    "비옥한 논밭",
    "단단한 쇠와 검",
    "빛나는 보석",
    "넓은 바다",
    "맑은 이슬",
];

const DEFAULT_TITLE: &str = "나만의 사주";

const GENERIC_DESCRIPTION: &str =
    "당신의 일간과 일지가 만드는 성향입니다. 사주는 참고용으로만 활용하세요.";

const GENERIC_ADVICE: &str = "오늘도 좋은 하루 되세요.";

const GYEONGSIN_TITLE: &str = "의리의 혁명가, 세상을 바꾸는 경신일주";

const GYEONGSIN_DESCRIPTION: &str = "경신(庚申)은 강금(强金)에 해당하며, 의리와 원칙으로 세상을 밝히는 상이다. \
굳은 의지와 정의감으로 불의에 맞서고, 때로는 혁명가적 기질로 시대를 이끈다. \
세밀한 판단력과 결단력이 있어 큰일을 이루는 명식이다.";

const GYEONGSIN_KEYWORDS: [&str; 4] = ["의리", "혁명", "결단력", "정의"];

const GYEONGSIN_ADVICE: &str = "당신의 원칙이 세상을 바꿉니다. 때로는 유연함도 잊지 마세요.";

/// Look up the text for a day stem/branch.
///
/// The notable-day entry wins regardless of stem and branch. A stem
/// outside 0..=9 gets the default title; keywords drop whichever of the
/// stem or branch is out of range.
pub fn lookup_interpretation(day_stem: u8, day_branch: u8, is_notable_day: bool) -> Interpretation {
    if is_notable_day {
        return Interpretation {
            title: GYEONGSIN_TITLE,
            description: GYEONGSIN_DESCRIPTION,
            keywords: GYEONGSIN_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            advice: GYEONGSIN_ADVICE,
        };
    }

    let stem = (day_stem < 10).then(|| Stem::from_index(day_stem as i64));
    let branch = (day_branch < 12).then(|| Branch::from_index(day_branch as i64));

    let mut keywords = Vec::with_capacity(2);
    if let Some(s) = stem {
        keywords.push(s.element_name());
    }
    if let Some(b) = branch {
        keywords.push(b.name().to_string());
    }

    Interpretation {
        title: STEM_TITLES
            .get(day_stem as usize)
            .copied()
            .unwrap_or(DEFAULT_TITLE),
        description: GENERIC_DESCRIPTION,
        keywords,
        advice: GENERIC_ADVICE,
    }
}

/// Text for a computed day pillar.
pub fn interpretation_for(day: GanJi, is_notable_day: bool) -> Interpretation {
    lookup_interpretation(day.stem().index(), day.branch().index(), is_notable_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganji::GYEONGSIN;

    #[test]
    fn notable_day_override() {
        let i = interpretation_for(GYEONGSIN, true);
        assert_eq!(i.title, GYEONGSIN_TITLE);
        assert_eq!(i.keywords, vec!["의리", "혁명", "결단력", "정의"]);
    }

    #[test]
    fn notable_flag_wins_over_stem() {
        let i = lookup_interpretation(0, 0, true);
        assert_eq!(i.title, GYEONGSIN_TITLE);
    }

    #[test]
    fn stem_titles() {
        let i = lookup_interpretation(2, 6, false);
        assert_eq!(i.title, "밝은 태양");
        assert_eq!(i.keywords, vec!["병화", "오"]);
        assert_eq!(i.advice, GENERIC_ADVICE);
    }

    #[test]
    fn gyeongsin_without_flag_uses_stem_entry() {
        let i = interpretation_for(GYEONGSIN, false);
        assert_eq!(i.title, "단단한 쇠와 검");
        assert_eq!(i.keywords, vec!["경금", "신"]);
    }

    #[test]
    fn unknown_stem_falls_back() {
        let i = lookup_interpretation(42, 3, false);
        assert_eq!(i.title, DEFAULT_TITLE);
        assert_eq!(i.keywords, vec!["묘"]);
    }

    #[test]
    fn every_stem_has_a_title() {
        for s in 0..10u8 {
            assert_ne!(lookup_interpretation(s, 0, false).title, DEFAULT_TITLE);
        }
    }
}
