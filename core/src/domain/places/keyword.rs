const LEADING_MODIFIERS: &[&str] = &[
    "따뜻한", "시원한", "차가운", "뜨거운", "얼큰한", "매운", "순한", "고급", "프리미엄",
    "특별한", "신선한", "건강한", "든든한", "간편한", "가벼운", "푸짐한", "깔끔한", "부드러운",
    "바삭한", "달콤한", "새콤한", "고소한", "진한", "담백한", "정통", "전통", "수제", "직화",
    "숯불", "수타",
];

const TRAILING_WORDS: &[&str] = &["정식", "세트", "코스", "요리", "전문점", "맛집", "식당"];

/// Reduces a decorated menu name to the words worth sending to a map search.
///
/// `"따뜻한 생선구이 정식"` becomes `"생선구이"`. Leading modifiers are stripped
/// only as whole words, in list order, once each; the original name comes back if
/// nothing is left.
pub fn extract_core_keyword(name: &str) -> String {
    let mut keyword = name.trim();

    for modifier in LEADING_MODIFIERS {
        if let Some(rest) = keyword.strip_prefix(modifier)
            && rest.starts_with(char::is_whitespace)
        {
            keyword = rest.trim_start();
        }
    }

    for word in TRAILING_WORDS {
        if let Some(rest) = keyword.strip_suffix(word) {
            keyword = rest.trim_end();
            break;
        }
    }

    let keyword = keyword.trim();
    if keyword.is_empty() {
        name.to_string()
    } else {
        keyword.to_string()
    }
}
