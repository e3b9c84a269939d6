use std::collections::HashSet;

use serde::Deserialize;

const NEGATIVE_TERMS: &[&str] = &[
    "이미지", "사진", "그림", "텍스트", "글자", "글씨", "랜덤", "아무거나", "아무", "몰라",
    "모름", "없음", "메뉴", "식단", "식단표", "오늘", "점심", "저녁", "테스트", "입력",
    "image", "img", "photo", "picture", "text", "random", "test", "menu", "none", "null",
    "asdf", "qwer",
];

const FOOD_SUFFIXES: &[&str] = &[
    "찌개", "전골", "국", "탕", "국밥", "덮밥", "비빔밥", "볶음밥", "밥", "김밥", "죽", "면",
    "국수", "냉면", "라면", "우동", "소바", "볶음", "구이", "조림", "찜", "무침", "튀김",
    "까스", "카츠", "커틀릿", "샐러드", "버거", "피자", "파스타", "스테이크", "샌드위치", "롤",
    "초밥", "카레", "커리", "만두", "떡볶이", "정식", "백반", "수프", "스프", "쌈", "전",
];

const KNOWN_FOOD_NAMES: &[&str] = &[
    "김치찌개", "된장찌개", "순두부찌개", "부대찌개", "청국장", "불고기", "제육볶음", "비빔밥",
    "김밥", "떡볶이", "순대", "라볶이", "삼겹살", "닭갈비", "갈비찜", "갈비탕", "설렁탕",
    "삼계탕", "육개장", "곰탕", "감자탕", "해장국", "잡채", "만두", "족발", "보쌈", "냉면",
    "칼국수", "수제비", "짜장면", "짬뽕", "탕수육", "마라탕", "마라샹궈", "훠궈", "쌀국수",
    "파스타", "피자", "햄버거", "치킨", "샐러드", "스테이크", "리조또", "오므라이스", "카레",
    "돈까스", "돈카츠", "초밥", "라멘", "우동", "규동", "텐동", "소바", "샌드위치", "토스트",
    "생선구이", "고등어구이", "제육덮밥", "오징어볶음", "닭볶음탕", "찜닭", "보리밥", "콩국수",
];

const FOREIGN_LANGUAGE_HINTS: &[&str] = &[
    "pasta", "pizza", "burger", "sushi", "ramen", "udon", "soba", "curry", "salad", "steak",
    "sandwich", "noodle", "soup", "risotto", "taco", "burrito", "chicken", "dumpling", "katsu",
    "kimchi", "bibimbap", "bulgogi", "tteok", "jjigae", "bap", "guksu", "galbi", "mandu",
];

/// Classification tables for menu tokens.
///
/// Built once at startup and shared read-only; there is no way to mutate a table
/// after construction. Foreign-language hints are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "TablesDocument")]
pub struct ClassificationTables {
    negative_terms: HashSet<String>,
    food_suffixes: Vec<String>,
    known_food_names: HashSet<String>,
    foreign_language_hints: Vec<String>,
}

/// On-disk shape of the tables.
#[derive(Debug, Deserialize)]
struct TablesDocument {
    #[serde(default)]
    negative_terms: Vec<String>,
    #[serde(default)]
    food_suffixes: Vec<String>,
    #[serde(default)]
    known_food_names: Vec<String>,
    #[serde(default)]
    foreign_language_hints: Vec<String>,
}

impl From<TablesDocument> for ClassificationTables {
    fn from(document: TablesDocument) -> Self {
        Self::new(
            document.negative_terms,
            document.food_suffixes,
            document.known_food_names,
            document.foreign_language_hints,
        )
    }
}

impl ClassificationTables {
    pub fn new<I, S>(
        negative_terms: I,
        food_suffixes: I,
        known_food_names: I,
        foreign_language_hints: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let normalize = |entries: I| -> Vec<String> {
            entries
                .into_iter()
                .map(Into::into)
                .map(|entry: String| entry.trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect()
        };

        Self {
            negative_terms: normalize(negative_terms).into_iter().collect(),
            food_suffixes: normalize(food_suffixes),
            known_food_names: normalize(known_food_names).into_iter().collect(),
            foreign_language_hints: normalize(foreign_language_hints)
                .into_iter()
                .map(|hint| hint.to_lowercase())
                .collect(),
        }
    }

    /// The built-in tables, tuned for Korean cafeteria menus.
    pub fn korean() -> Self {
        Self::new(
            NEGATIVE_TERMS.iter().copied(),
            FOOD_SUFFIXES.iter().copied(),
            KNOWN_FOOD_NAMES.iter().copied(),
            FOREIGN_LANGUAGE_HINTS.iter().copied(),
        )
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative_terms.contains(token)
    }

    pub fn is_known_food(&self, token: &str) -> bool {
        self.known_food_names.contains(token)
    }

    pub fn has_food_suffix(&self, token: &str) -> bool {
        self.food_suffixes
            .iter()
            .any(|suffix| token.ends_with(suffix.as_str()))
    }

    /// `lowered` must already be lower-cased.
    pub fn contains_foreign_hint(&self, lowered: &str) -> bool {
        self.foreign_language_hints
            .iter()
            .any(|hint| lowered.contains(hint.as_str()))
    }

    pub fn len(&self) -> usize {
        self.negative_terms.len()
            + self.food_suffixes.len()
            + self.known_food_names.len()
            + self.foreign_language_hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ClassificationTables {
    fn default() -> Self {
        Self::korean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_tables_cover_sample_dishes() {
        let tables = ClassificationTables::korean();
        assert!(tables.is_known_food("김치찌개"));
        assert!(tables.is_known_food("파스타"));
        assert!(tables.is_known_food("초밥"));
        assert!(tables.has_food_suffix("불고기 덮밥"));
        assert!(tables.is_negative("그림"));
        assert!(tables.contains_foreign_hint("pasta"));
        assert!(!tables.contains_foreign_hint("xyz123"));
    }

    #[test]
    fn test_hints_are_stored_lowercase() {
        let tables = ClassificationTables::new(
            Vec::<String>::new(),
            vec![],
            vec![],
            vec!["Gnocchi".to_string()],
        );
        assert!(tables.contains_foreign_hint("potato gnocchi"));
    }

    #[test]
    fn test_blank_entries_are_dropped() {
        let tables = ClassificationTables::new(vec!["  "], vec![""], vec![" 김밥 "], vec![]);
        assert_eq!(tables.len(), 1);
        assert!(tables.is_known_food("김밥"));
        assert!(!tables.has_food_suffix("anything"));
    }

    #[test]
    fn test_deserialize_from_json_document() {
        let json = r#"{
            "negative_terms": ["사진"],
            "known_food_names": ["떡국"],
            "foreign_language_hints": ["TTEOKGUK"]
        }"#;
        let tables: ClassificationTables = serde_json::from_str(json).unwrap();

        assert!(tables.is_negative("사진"));
        assert!(tables.is_known_food("떡국"));
        assert!(tables.contains_foreign_hint("tteokguk"));
        assert!(!tables.has_food_suffix("떡국"));
    }
}
