use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{KakaoConfig, entities::app_errors::CoreError},
    places::{
        entities::{GeoPoint, Place, PlaceSearch},
        ports::PlacesClient,
    },
};

const MAX_RADIUS_METERS: u32 = 20_000;
const MAX_PAGE_SIZE: u32 = 15;

/// Kakao Local REST client for reverse geocoding and keyword search.
#[derive(Debug, Clone)]
pub struct KakaoLocalClient {
    rest_api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct KakaoResponse<T> {
    documents: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct AddressDocument {
    road_address: Option<AddressName>,
    address: Option<AddressName>,
}

#[derive(Debug, Deserialize)]
struct AddressName {
    address_name: String,
}

#[derive(Debug, Deserialize)]
struct PlaceDocument {
    place_name: String,
    #[serde(default)]
    address_name: String,
    #[serde(default)]
    road_address_name: String,
    #[serde(default)]
    phone: String,
    x: String,
    y: String,
    #[serde(default)]
    distance: String,
    #[serde(default)]
    place_url: String,
}

impl KakaoLocalClient {
    pub fn new(config: &KakaoConfig) -> Self {
        Self {
            rest_api_key: config.rest_api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_kakao_api<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<KakaoResponse<T>, CoreError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("KakaoAK {}", self.rest_api_key))
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Kakao API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Kakao API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Kakao API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Kakao API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Kakao response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse Kakao response: {}", e))
        })
    }
}

fn first_address(documents: Vec<AddressDocument>) -> Option<String> {
    documents.into_iter().find_map(|document| {
        document
            .road_address
            .or(document.address)
            .map(|name| name.address_name)
            .filter(|name| !name.is_empty())
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn to_place(document: PlaceDocument) -> Option<Place> {
    let (Ok(lng), Ok(lat)) = (document.x.parse::<f64>(), document.y.parse::<f64>()) else {
        tracing::warn!(
            "Skipping place {:?} with invalid coordinates",
            document.place_name
        );
        return None;
    };

    let address = non_empty(document.road_address_name).unwrap_or(document.address_name);

    Some(Place {
        name: document.place_name,
        address,
        phone: non_empty(document.phone),
        lat,
        lng,
        distance_meters: document.distance.parse().ok(),
        place_url: non_empty(document.place_url),
    })
}

impl PlacesClient for KakaoLocalClient {
    async fn reverse_geocode(&self, point: GeoPoint) -> Result<Option<String>, CoreError> {
        let response: KakaoResponse<AddressDocument> = self
            .call_kakao_api(
                "/v2/local/geo/coord2address.json",
                &[("x", point.lng.to_string()), ("y", point.lat.to_string())],
            )
            .await?;

        Ok(first_address(response.documents))
    }

    async fn search_keyword(&self, search: PlaceSearch) -> Result<Vec<Place>, CoreError> {
        let response: KakaoResponse<PlaceDocument> = self
            .call_kakao_api(
                "/v2/local/search/keyword.json",
                &[
                    ("query", search.keyword.clone()),
                    ("x", search.center.lng.to_string()),
                    ("y", search.center.lat.to_string()),
                    (
                        "radius",
                        search.radius_meters.min(MAX_RADIUS_METERS).to_string(),
                    ),
                    ("size", search.size.clamp(1, MAX_PAGE_SIZE).to_string()),
                ],
            )
            .await?;

        let places: Vec<Place> = response.documents.into_iter().filter_map(to_place).collect();
        tracing::debug!("Found {} places for {:?}", places.len(), search.keyword);

        Ok(places)
    }
}
