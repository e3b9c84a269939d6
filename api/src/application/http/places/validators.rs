use lunchpick_core::domain::places::GeoPoint;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct SearchRestaurantsQuery {
    /// Recommended menu name; modifiers are stripped before searching
    #[validate(length(min = 1, max = 100, message = "menu is required"))]
    pub menu: String,

    #[validate(range(min = -90.0, max = 90.0, message = "lat out of range"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "lng out of range"))]
    pub lng: f64,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct GetAddressQuery {
    #[validate(range(min = -90.0, max = 90.0, message = "lat out of range"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "lng out of range"))]
    pub lng: f64,
}

impl SearchRestaurantsQuery {
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

impl GetAddressQuery {
    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }
}
