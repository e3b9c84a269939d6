//! Script rules for Hangul menu input.
//!
//! A syllable block is a precomposed Hangul syllable (U+AC00..=U+D7A3). Jamo are
//! the isolated letters that have not been composed into a block, from both the
//! conjoining and the compatibility ranges.

use std::sync::LazyLock;

use regex::Regex;

static JAMO_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s\x{1100}-\x{11FF}\x{3131}-\x{318E}\x{A960}-\x{A97F}\x{D7B0}-\x{D7FF}]+$")
        .unwrap()
});

static SYLLABLE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{AC00}-\x{D7A3}]{2,}").unwrap());

static ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]{2,}").unwrap());

/// True when the token is made only of isolated jamo (whitespace between them allowed).
pub fn is_jamo_only(token: &str) -> bool {
    JAMO_ONLY.is_match(token)
}

/// At least two consecutive syllable blocks, or two consecutive ASCII alphanumerics.
pub fn has_lexical_substance(token: &str) -> bool {
    SYLLABLE_RUN.is_match(token) || ALPHANUMERIC_RUN.is_match(token)
}
