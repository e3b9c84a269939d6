use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::recommend_from_cafeteria::{
    __path_recommend_from_cafeteria, recommend_from_cafeteria,
};
use super::handlers::recommend_from_preferences::{
    __path_recommend_from_preferences, recommend_from_preferences,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(recommend_from_cafeteria, recommend_from_preferences, get_recipe))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/lunch/recommendations", state.args.server.root_path),
            post(recommend_from_cafeteria),
        )
        .route(
            &format!(
                "{}/lunch/recommendations/preferences",
                state.args.server.root_path
            ),
            post(recommend_from_preferences),
        )
        .route(
            &format!("{}/lunch/recipes", state.args.server.root_path),
            post(get_recipe),
        )
}
