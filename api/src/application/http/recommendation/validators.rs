use lunchpick_core::domain::recommendation::UserLocation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::menu::validators::ImageMetadata;

pub const DEFAULT_LOCATION: &str = "서울";

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_servings() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserLocationPayload {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub longitude: f64,
}

impl From<UserLocationPayload> for UserLocation {
    fn from(payload: UserLocationPayload) -> Self {
        UserLocation {
            latitude: payload.latitude,
            longitude: payload.longitude,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendFromCafeteriaValidator {
    #[validate(length(max = 10000, message = "text is too long"))]
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub has_image: bool,

    #[validate(nested)]
    #[serde(default)]
    pub image: Option<ImageMetadata>,

    #[validate(length(min = 1, max = 100, message = "location must be 1-100 characters"))]
    #[serde(default = "default_location")]
    pub location: String,

    #[validate(nested)]
    #[serde(default)]
    pub user_location: Option<UserLocationPayload>,
}

fn default_num_people() -> u32 {
    1
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendFromPreferencesValidator {
    #[validate(length(min = 1, max = 100, message = "location must be 1-100 characters"))]
    #[serde(default = "default_location")]
    pub location: String,

    /// Cuisine such as 한식 or 일식, defaults to 상관없음
    #[validate(length(max = 50, message = "food_type is too long"))]
    #[serde(default)]
    pub food_type: Option<String>,

    /// Defaults to 평범한
    #[validate(length(max = 50, message = "mood is too long"))]
    #[serde(default)]
    pub mood: Option<String>,

    #[validate(range(min = 1, max = 10, message = "num_people must be between 1 and 10"))]
    #[serde(default = "default_num_people")]
    pub num_people: u32,

    /// One mood per diner in group mode
    #[validate(length(max = 10, message = "too many moods"))]
    #[serde(default)]
    pub moods: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GetRecipeValidator {
    #[validate(length(min = 1, max = 100, message = "menu_name is required"))]
    pub menu_name: String,

    #[validate(range(min = 1, max = 20, message = "num_servings must be between 1 and 20"))]
    #[serde(default = "default_servings")]
    pub num_servings: u32,
}
