use lunchpick_core::domain::recommendation::RecommendedMenu;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SpinRouletteValidator {
    #[validate(length(max = 50, message = "too many menus"))]
    #[serde(default)]
    pub menus: Vec<RecommendedMenu>,

    /// Daily menus, shown on the wheel as 오늘의 메뉴
    #[validate(length(max = 50, message = "too many daily menus"))]
    #[serde(default)]
    pub daily: Vec<RecommendedMenu>,

    /// Wheel rotation in degrees before this spin
    #[serde(default)]
    pub current_rotation: f64,
}
