pub mod get_recipe;
pub mod recommend_from_preferences;
pub mod recommend_from_cafeteria;
