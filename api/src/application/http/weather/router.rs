use super::handlers::get_weather::{__path_get_weather, get_weather};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_weather))]
pub struct WeatherApiDoc;

pub fn weather_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/weather", state.args.server.root_path),
        get(get_weather),
    )
}
