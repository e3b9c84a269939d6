use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CafeteriaRecommendationRequest {
    pub location: String,
    pub cafeteria_menu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_location: Option<UserLocation>,
    #[serde(default = "default_prefer_external")]
    pub prefer_external: bool,
}

fn default_prefer_external() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRequest {
    pub menu_name: String,
    pub num_servings: u32,
}

pub const ANY_FOOD_TYPE: &str = "상관없음";
pub const DEFAULT_MOOD: &str = "평범한";

/// Preference screen input. `moods` carries one mood per diner in group mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceRecommendationRequest {
    pub location: String,
    pub food_type: String,
    pub mood: String,
    pub num_people: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moods: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct SubmitMenuInput {
    pub text: String,
    pub has_image: bool,
    pub location: String,
    pub user_location: Option<UserLocation>,
}
