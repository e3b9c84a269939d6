use axum::extract::State;

use crate::application::http::{
    recommendation::validators::RecommendFromPreferencesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use lunchpick_core::domain::recommendation::{
    ANY_FOOD_TYPE, DEFAULT_MOOD, LunchService, PreferenceOutcome,
    PreferenceRecommendationRequest,
};

#[utoipa::path(
    post,
    path = "/recommendations/preferences",
    tag = "lunch",
    summary = "Recommend lunch from preferences",
    description = "Picks a menu from cuisine, mood and party size, taking the current weather into account. A failing backend is reported as a transient failure rather than an error.",
    responses(
        (status = 200, body = PreferenceOutcome),
        (status = 400, description = "Invalid preferences")
    ),
    request_body = RecommendFromPreferencesValidator
)]
pub async fn recommend_from_preferences(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendFromPreferencesValidator>,
) -> Result<Response<PreferenceOutcome>, ApiError> {
    let outcome = state
        .service
        .recommend_from_preferences(PreferenceRecommendationRequest {
            location: payload.location,
            food_type: payload
                .food_type
                .unwrap_or_else(|| ANY_FOOD_TYPE.to_string()),
            mood: payload.mood.unwrap_or_else(|| DEFAULT_MOOD.to_string()),
            num_people: payload.num_people,
            moods: payload.moods,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(outcome))
}
