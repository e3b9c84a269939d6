use crate::application::http::menu::validators::ValidateMenuValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use lunchpick_core::domain::menu::{
    MenuService, ValidateMenuInput, ValidationResponse, upload::ImageAttachment,
};

#[utoipa::path(
    post,
    path = "/validate",
    tag = "menu",
    summary = "Validate cafeteria menu input",
    description = "Checks that the submitted text names at least one food. Rejections carry a title and detail suitable for an alert dialog.",
    responses(
        (status = 200, body = ValidationResponse),
        (status = 413, description = "Attached image exceeds 5MB")
    ),
    request_body = ValidateMenuValidator
)]
pub async fn validate_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ValidateMenuValidator>,
) -> Result<Response<ValidationResponse>, ApiError> {
    if let Some(image) = &payload.image {
        ImageAttachment::new(image.file_name.clone(), image.size_bytes).check_size()?;
    }

    let result = state.service.validate_menu(ValidateMenuInput {
        text: payload.text,
        has_image: payload.has_image || payload.image.is_some(),
    });

    Ok(Response::OK(ValidationResponse::from(result)))
}
