use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

const DELIMITERS: [char; 4] = ['\n', ',', ';', '|'];

const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Strips surrounding whitespace and byte order marks, then composes the token
/// to NFC so decomposed Hangul reads as syllable blocks.
pub fn normalize_token(piece: &str) -> String {
    piece.trim_matches(is_padding).nfc().collect()
}

/// Splits raw menu text into normalized, non-empty, unique tokens in first-seen order.
pub fn parse(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    raw.split(DELIMITERS)
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Canonical delimiter-joined form of a token list.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Unique union of the tokens of `existing` and `guess`, existing tokens first.
pub fn merge_menu_text(existing: &str, guess: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    parse(existing)
        .into_iter()
        .chain(parse(guess))
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_every_delimiter() {
        let tokens = parse("김치찌개\n된장찌개, 불고기 덮밥;제육볶음|비빔밥");
        assert_eq!(
            tokens,
            vec!["김치찌개", "된장찌개", "불고기 덮밥", "제육볶음", "비빔밥"]
        );
    }

    #[test]
    fn test_parse_trims_and_drops_empty_pieces() {
        let tokens = parse("  김밥 ,, ;\r\n | 라면  \n");
        assert_eq!(tokens, vec!["김밥", "라면"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse(" , ; | \n").is_empty());
    }

    #[test]
    fn test_parse_deduplicates_keeping_first_seen_order() {
        let tokens = parse("라면, 김밥, 라면, 김밥 , 우동");
        assert_eq!(tokens, vec!["라면", "김밥", "우동"]);
    }

    #[test]
    fn test_parse_deduplication_is_case_sensitive() {
        let tokens = parse("Pasta, pasta, PASTA");
        assert_eq!(tokens, vec!["Pasta", "pasta", "PASTA"]);
    }

    #[test]
    fn test_parse_is_idempotent_through_canonical_form() {
        let inputs = [
            "김치찌개, 파스타, 초밥",
            "a|b|a;;c\n\n d ",
            "",
            "  불고기 덮밥 ,ㅇㅇ , 불고기 덮밥",
            "🍜, 🍣 | 🍜",
        ];

        for raw in inputs {
            let first = parse(raw);
            let second = parse(&join_tokens(&first));
            assert_eq!(first, second, "round trip changed tokens for {raw:?}");
        }
    }

    #[test]
    fn test_parse_handles_very_long_input() {
        let raw = "김밥, ".repeat(50_000);
        assert_eq!(parse(&raw), vec!["김밥"]);
    }

    #[test]
    fn test_parse_strips_byte_order_marks() {
        assert_eq!(
            parse("\u{FEFF}순대, 초밥\u{FEFF}"),
            vec!["순대", "초밥"]
        );
        assert!(parse("\u{FEFF}").is_empty());
        assert!(parse(" \u{FEFF} , \u{FEFF}\n").is_empty());
    }

    #[test]
    fn test_parse_composes_decomposed_hangul() {
        // 김밥 as conjoining jamo, the way macOS stores file names
        let decomposed = "\u{1100}\u{1175}\u{11B7}\u{1107}\u{1161}\u{11B8}";

        assert_eq!(parse(decomposed), vec!["김밥"]);
        assert_eq!(parse(&format!("김밥, {decomposed}")), vec!["김밥"]);
    }

    #[test]
    fn test_merge_menu_text_keeps_existing_first() {
        let merged = merge_menu_text("김밥, 라면", "라면, 우동");
        assert_eq!(merged, vec!["김밥", "라면", "우동"]);
    }
}
