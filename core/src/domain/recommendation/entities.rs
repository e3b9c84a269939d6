use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::Rejection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedMenu {
    #[serde(alias = "menu")]
    pub menu_name: String,
    #[serde(rename = "type")]
    pub kind: String, // '상위호환' | '비슷한카테고리' | '날씨기반'
    #[serde(default)]
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_away: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CafeteriaRecommendation {
    #[serde(default)]
    pub cafeteria_menu: String,
    pub recommendations: Vec<RecommendedMenu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_summary: Option<String>,
}

/// The recommendation service asks for more context instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NeedMoreInfo {
    pub need_more_info: bool,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RecommendationOutcome {
    NeedMoreInfo(NeedMoreInfo),
    Recommendations(CafeteriaRecommendation),
}

impl RecommendationOutcome {
    /// Reads a service payload. Only an explicit `need_more_info: true` counts as a
    /// request for more context; anything else must carry recommendations.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let needs_more = value
            .get("need_more_info")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);

        if needs_more {
            serde_json::from_value(value).map(RecommendationOutcome::NeedMoreInfo)
        } else {
            serde_json::from_value(value).map(RecommendationOutcome::Recommendations)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub menu_name: String,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// What the input screen shows after a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Rejected(Rejection),
    Recommended(CafeteriaRecommendation),
    NeedMoreInfo(NeedMoreInfo),
    TransientFailure { message: String },
}

/// Weather echoed back with a preference recommendation. The backend sends either
/// this summary or the full weather record, hence the alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, alias = "sky_condition", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_people: Option<u32>,
}

/// A single pick for the preference screen, plus a few alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceRecommendation {
    #[serde(alias = "menu_name")]
    pub menu: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_match: Option<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_info: Option<WeatherInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PreferenceOutcome {
    Recommended(PreferenceRecommendation),
    TransientFailure { message: String },
}

pub const TRANSIENT_FAILURE_MESSAGE: &str = "추천을 가져오는데 실패했습니다.";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_reads_recommendations() {
        let value = json!({
            "cafeteria_menu": "김치찌개",
            "recommendations": [
                { "type": "상위호환", "menu": "생선구이", "reason": "든든한 한식", "price_range": "10,000원" },
                { "type": "날씨기반", "menu_name": "칼국수", "reason": "쌀쌀한 날씨", "minutes_away": 7 }
            ],
            "weather_summary": "12°C, 흐림"
        });

        let RecommendationOutcome::Recommendations(recommendation) =
            RecommendationOutcome::from_value(value).unwrap()
        else {
            panic!("expected recommendations");
        };

        assert_eq!(recommendation.recommendations.len(), 2);
        assert_eq!(recommendation.recommendations[0].menu_name, "생선구이");
        assert_eq!(recommendation.recommendations[0].kind, "상위호환");
        assert_eq!(recommendation.recommendations[1].minutes_away, Some(7));
    }

    #[test]
    fn test_outcome_reads_need_more_info() {
        let value = json!({
            "need_more_info": true,
            "missing": ["location"],
            "brief_rationale": "위치 정보가 없어요"
        });

        assert_eq!(
            RecommendationOutcome::from_value(value).unwrap(),
            RecommendationOutcome::NeedMoreInfo(NeedMoreInfo {
                need_more_info: true,
                missing: vec!["location".to_string()],
                brief_rationale: Some("위치 정보가 없어요".to_string()),
            })
        );
    }

    #[test]
    fn test_need_more_info_false_falls_back_to_recommendations() {
        let value = json!({ "need_more_info": false, "recommendations": [] });
        assert!(matches!(
            RecommendationOutcome::from_value(value),
            Ok(RecommendationOutcome::Recommendations(_))
        ));
    }

    #[test]
    fn test_preference_recommendation_reads_both_weather_shapes() {
        let summary: PreferenceRecommendation = serde_json::from_value(json!({
            "menu": "냉면",
            "category": "한식",
            "reason": "시원한 육수",
            "temperature_match": "더운 날씨(29°C)에 시원한 음식으로 더위를 식히세요",
            "alternatives": ["콩국수", "비빔냉면"],
            "weather_info": { "location": "서울", "temperature": 29.0, "condition": "맑음" }
        }))
        .unwrap();
        assert_eq!(summary.alternatives.len(), 2);
        assert_eq!(
            summary.weather_info.and_then(|w| w.condition),
            Some("맑음".to_string())
        );

        let full: PreferenceRecommendation = serde_json::from_value(json!({
            "menu": "김치찌개",
            "category": "한식",
            "reason": "추운 날씨",
            "weather_info": { "location": "부산", "temperature": 3.5, "sky_condition": "흐림", "humidity": 40 }
        }))
        .unwrap();
        assert!(full.alternatives.is_empty());
        assert_eq!(
            full.weather_info.and_then(|w| w.condition),
            Some("흐림".to_string())
        );
    }

    #[test]
    fn test_submission_outcome_is_tagged_by_status() {
        let outcome = SubmissionOutcome::TransientFailure {
            message: TRANSIENT_FAILURE_MESSAGE.to_string(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], json!("transient_failure"));
        assert_eq!(value["message"], json!(TRANSIENT_FAILURE_MESSAGE));
    }
}
