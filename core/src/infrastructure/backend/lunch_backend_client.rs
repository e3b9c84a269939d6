use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::{
    common::{BackendConfig, entities::app_errors::CoreError},
    recommendation::{
        entities::{PreferenceRecommendation, Recipe, RecommendationOutcome},
        ports::RecommendationClient,
        value_objects::{
            CafeteriaRecommendationRequest, PreferenceRecommendationRequest, RecipeRequest,
        },
    },
    weather::{
        entities::{Weather, WeatherQuery},
        ports::WeatherClient,
    },
};

/// HTTP client for the recommendation backend, which also serves weather lookups.
#[derive(Debug, Clone)]
pub struct LunchBackendClient {
    base_url: String,
    client: Client,
}

/// Every backend response is wrapped as `{ "success": bool, "data": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
}

#[derive(Debug, Serialize)]
struct RecipeBody<'a> {
    menu_name: &'a str,
    num_servings: u32,
}

impl LunchBackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build backend HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn weather_url(&self, query: &WeatherQuery) -> String {
        let mut url = format!(
            "{}/api/weather?location={}",
            self.base_url,
            urlencoding::encode(&query.location)
        );

        if let Some((lat, lng)) = query.coordinates() {
            url.push_str(&format!("&lat={}&lng={}", lat, lng));
        }

        url
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
        what: &str,
    ) -> Result<T, CoreError> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Backend {} error: {} - {}", what, status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "{} API returned error: {} - {}",
                what, status, error_text
            )));
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse backend {} response: {}", what, e);
            CoreError::ExternalServiceError(format!("Failed to parse {} response: {}", what, e))
        })?;

        unwrap_envelope(envelope, what)
    }

    fn request_error(what: &str, e: reqwest::Error) -> CoreError {
        tracing::error!("Backend {} request failed: {}", what, e);
        CoreError::ExternalServiceError(format!("{} API error: {}", what, e))
    }
}

fn unwrap_envelope<T>(envelope: Envelope<T>, what: &str) -> Result<T, CoreError> {
    match envelope {
        Envelope {
            success: true,
            data: Some(data),
        } => Ok(data),
        _ => Err(CoreError::ExternalServiceError(format!(
            "No {} data from backend",
            what
        ))),
    }
}

impl WeatherClient for LunchBackendClient {
    async fn get_weather(&self, query: WeatherQuery) -> Result<Weather, CoreError> {
        let response = self
            .client
            .get(self.weather_url(&query))
            .send()
            .await
            .map_err(|e| Self::request_error("weather", e))?;

        Self::read_envelope(response, "weather").await
    }
}

impl RecommendationClient for LunchBackendClient {
    async fn recommend_from_cafeteria(
        &self,
        request: CafeteriaRecommendationRequest,
    ) -> Result<RecommendationOutcome, CoreError> {
        let url = format!("{}/api/recommend-from-cafeteria", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Self::request_error("recommendation", e))?;

        let data: serde_json::Value = Self::read_envelope(response, "recommendation").await?;

        RecommendationOutcome::from_value(data).map_err(|e| {
            tracing::error!("Unexpected recommendation payload: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse recommendation: {}", e))
        })
    }

    async fn recommend_from_preferences(
        &self,
        request: PreferenceRecommendationRequest,
    ) -> Result<PreferenceRecommendation, CoreError> {
        let url = format!("{}/api/recommend", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Self::request_error("recommendation", e))?;

        Self::read_envelope(response, "recommendation").await
    }

    async fn get_recipe(&self, request: RecipeRequest) -> Result<Recipe, CoreError> {
        let url = format!("{}/api/recipe", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&RecipeBody {
                menu_name: &request.menu_name,
                num_servings: request.num_servings,
            })
            .send()
            .await
            .map_err(|e| Self::request_error("recipe", e))?;

        Self::read_envelope(response, "recipe").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LunchBackendClient {
        LunchBackendClient::new(&BackendConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_weather_url_encodes_location() {
        let url = client().weather_url(&WeatherQuery::by_name("서울 중구"));
        assert_eq!(
            url,
            "http://localhost:8000/api/weather?location=%EC%84%9C%EC%9A%B8%20%EC%A4%91%EA%B5%AC"
        );
    }

    #[test]
    fn test_weather_url_appends_coordinates_only_when_complete() {
        let with_coords = client().weather_url(&WeatherQuery {
            location: "Seoul".to_string(),
            lat: Some(37.5),
            lng: Some(127.25),
        });
        assert_eq!(
            with_coords,
            "http://localhost:8000/api/weather?location=Seoul&lat=37.5&lng=127.25"
        );

        let half = client().weather_url(&WeatherQuery {
            location: "Seoul".to_string(),
            lat: Some(37.5),
            lng: None,
        });
        assert_eq!(half, "http://localhost:8000/api/weather?location=Seoul");
    }

    #[test]
    fn test_envelope_requires_success_and_data() {
        let ok: Envelope<u32> = serde_json::from_str(r#"{"success":true,"data":3}"#).unwrap();
        assert_eq!(unwrap_envelope(ok, "test"), Ok(3));

        let failed: Envelope<u32> =
            serde_json::from_str(r#"{"success":false,"data":3}"#).unwrap();
        assert!(unwrap_envelope(failed, "test").is_err());

        let empty: Envelope<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(unwrap_envelope(empty, "test").is_err());
    }

    #[test]
    fn test_preference_request_body_matches_backend() {
        let body = serde_json::to_value(PreferenceRecommendationRequest {
            location: "서울".to_string(),
            food_type: "상관없음".to_string(),
            mood: "평범한".to_string(),
            num_people: 1,
            moods: None,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "location": "서울",
                "food_type": "상관없음",
                "mood": "평범한",
                "num_people": 1
            })
        );
    }

    #[test]
    fn test_weather_payload_maps_to_entity() {
        let envelope: Envelope<Weather> = serde_json::from_str(
            r#"{"success":true,"data":{"temperature":18.2,"sky_condition":"구름많음","location":"서울","humidity":55}}"#,
        )
        .unwrap();

        let weather = unwrap_envelope(envelope, "weather").unwrap();
        assert_eq!(weather.sky_condition, "구름많음");
        assert_eq!(weather.humidity, Some(55.0));
        assert_eq!(weather.precipitation, None);
    }
}
