use axum::extract::State;

use crate::application::http::{
    recommendation::validators::GetRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use lunchpick_core::domain::recommendation::{LunchService, Recipe, RecipeRequest};

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "lunch",
    summary = "Get a recipe",
    description = "Fetches a recipe for the given menu scaled to the number of servings.",
    responses(
        (status = 200, body = Recipe),
        (status = 502, description = "Recommendation backend unavailable")
    ),
    request_body = GetRecipeValidator
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GetRecipeValidator>,
) -> Result<Response<Recipe>, ApiError> {
    let recipe = state
        .service
        .recipe_for(RecipeRequest {
            menu_name: payload.menu_name,
            num_servings: payload.num_servings,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recipe))
}
