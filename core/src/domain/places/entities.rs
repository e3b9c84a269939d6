use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Radius used when looking for restaurants around the user.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 2000;
pub const DEFAULT_SEARCH_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSearch {
    pub keyword: String,
    pub center: GeoPoint,
    pub radius_meters: u32,
    pub size: u32,
}

impl PlaceSearch {
    pub fn around(keyword: impl Into<String>, center: GeoPoint) -> Self {
        Self {
            keyword: keyword.into(),
            center,
            radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
            size: DEFAULT_SEARCH_SIZE,
        }
    }
}
