use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recommendation::entities::RecommendedMenu;

pub const DAILY_MENU_KIND: &str = "오늘의 메뉴";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouletteEntry {
    pub menu_name: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

impl From<&RecommendedMenu> for RouletteEntry {
    fn from(menu: &RecommendedMenu) -> Self {
        Self {
            menu_name: menu.menu_name.clone(),
            kind: menu.kind.clone(),
            restaurant_name: menu.restaurant_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpinOutcome {
    pub index: usize,
    pub entry: RouletteEntry,
    /// Absolute wheel rotation in degrees after the spin.
    pub rotation: f64,
}
