use axum::extract::State;

use crate::application::http::{
    recommendation::validators::RecommendFromCafeteriaValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use lunchpick_core::domain::{
    menu::upload::ImageAttachment,
    recommendation::{LunchService, SubmissionOutcome, SubmitMenuInput},
};

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "lunch",
    summary = "Recommend lunch from the cafeteria menu",
    description = "Validates the submitted cafeteria menu and, when it names at least one food, asks the recommendation backend for alternatives. Invalid input is answered locally without contacting the backend.",
    responses(
        (status = 200, body = SubmissionOutcome),
        (status = 413, description = "Attached image exceeds 5MB")
    ),
    request_body = RecommendFromCafeteriaValidator
)]
pub async fn recommend_from_cafeteria(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendFromCafeteriaValidator>,
) -> Result<Response<SubmissionOutcome>, ApiError> {
    if let Some(image) = &payload.image {
        ImageAttachment::new(image.file_name.clone(), image.size_bytes).check_size()?;
    }

    let outcome = state
        .service
        .submit_cafeteria_menu(SubmitMenuInput {
            text: payload.text,
            has_image: payload.has_image || payload.image.is_some(),
            location: payload.location,
            user_location: payload.user_location.map(Into::into),
        })
        .await;

    Ok(Response::OK(outcome))
}
