use axum::extract::State;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::application::http::{
    recommendation::validators::DEFAULT_LOCATION,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};
use lunchpick_core::domain::weather::{Weather, WeatherQuery, WeatherService};

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct GetWeatherQuery {
    /// Location name, defaults to 서울
    #[validate(length(max = 100, message = "location is too long"))]
    pub location: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "lat out of range"))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "lng out of range"))]
    pub lng: Option<f64>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "weather",
    summary = "Current weather",
    description = "Looks up the current weather by coordinates when both are given, otherwise by location name.",
    params(GetWeatherQuery),
    responses(
        (status = 200, body = Weather),
        (status = 400, description = "Malformed or out-of-range query"),
        (status = 502, description = "Weather backend unavailable")
    )
)]
pub async fn get_weather(
    ValidateQuery(query): ValidateQuery<GetWeatherQuery>,
    State(state): State<AppState>,
) -> Result<Response<Weather>, ApiError> {
    let weather = state
        .service
        .current_weather(WeatherQuery {
            location: query
                .location
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            lat: query.lat,
            lng: query.lng,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(weather))
}
