//! Plain-text summary for pasting into messaging apps.

use crate::report::SajuReport;

const HEADER: &str = "✨ [나의 사주 운명 결과] ✨";
const TRAIT_LINE: &str = "✔️ 당신의 일간과 일지가 만드는 성향입니다.";
const TEASER: &str = "... (더 보기)";
const CALL_TO_ACTION: &str = "👇 3초만에 내 운명 확인하기";

/// Share text for `name`'s report, ending with `url`.
pub fn share_message(name: &str, report: &SajuReport, url: &str) -> String {
    format!(
        "{HEADER}\n\n{name}님은 어떤 사람일까요? 👀\n\n{title}\n{TRAIT_LINE}\n\n{TEASER}\n\n{CALL_TO_ACTION}\n{url}",
        name = name.trim(),
        title = report.title,
    )
}
