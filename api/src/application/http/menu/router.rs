use super::handlers::parse_menu::{__path_parse_menu, parse_menu};
use super::handlers::validate_menu::{__path_validate_menu, validate_menu};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(parse_menu, validate_menu))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menu/parse", state.args.server.root_path),
            post(parse_menu),
        )
        .route(
            &format!("{}/menu/validate", state.args.server.root_path),
            post(validate_menu),
        )
}
