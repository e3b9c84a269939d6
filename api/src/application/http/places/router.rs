use super::handlers::get_address::{__path_get_address, get_address};
use super::handlers::search_restaurants::{__path_search_restaurants, search_restaurants};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_restaurants, get_address))]
pub struct PlacesApiDoc;

pub fn places_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/places/restaurants", state.args.server.root_path),
            get(search_restaurants),
        )
        .route(
            &format!("{}/places/address", state.args.server.root_path),
            get(get_address),
        )
}
