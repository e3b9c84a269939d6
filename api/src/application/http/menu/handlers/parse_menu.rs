use crate::application::http::menu::validators::ParseMenuValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use lunchpick_core::domain::menu::{
    MenuService, parser::merge_menu_text, upload::menu_guess_from_file_name,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ParseMenuResponse {
    pub tokens: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/parse",
    tag = "menu",
    summary = "Split menu text into tokens",
    description = "Splits raw cafeteria menu text on newlines, commas, semicolons and pipes. When a file name is given, the menu guessed from it is merged after the typed tokens.",
    responses(
        (status = 200, body = ParseMenuResponse)
    ),
    request_body = ParseMenuValidator
)]
pub async fn parse_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseMenuValidator>,
) -> Result<Response<ParseMenuResponse>, ApiError> {
    let tokens = match payload.file_name.as_deref() {
        Some(file_name) if !file_name.trim().is_empty() => {
            merge_menu_text(&payload.text, &menu_guess_from_file_name(file_name))
        }
        _ => state.service.parse_menu(&payload.text),
    };

    Ok(Response::OK(ParseMenuResponse { tokens }))
}
