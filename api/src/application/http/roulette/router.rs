use super::handlers::spin_roulette::{__path_spin_roulette, spin_roulette};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(spin_roulette))]
pub struct RouletteApiDoc;

pub fn roulette_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/roulette/spin", state.args.server.root_path),
        post(spin_roulette),
    )
}
