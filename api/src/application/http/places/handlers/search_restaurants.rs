use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    places::validators::SearchRestaurantsQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};
use lunchpick_core::domain::places::{Place, PlacesService};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRestaurantsResponse {
    pub items: Vec<Place>,
}

#[utoipa::path(
    get,
    path = "/restaurants",
    tag = "places",
    summary = "Nearby restaurants for a menu",
    description = "Searches restaurants within 2km of the given coordinates using the menu's core keyword.",
    params(SearchRestaurantsQuery),
    responses(
        (status = 200, body = SearchRestaurantsResponse),
        (status = 400, description = "Invalid coordinates or empty menu"),
        (status = 502, description = "Places provider unavailable")
    )
)]
pub async fn search_restaurants(
    ValidateQuery(query): ValidateQuery<SearchRestaurantsQuery>,
    State(state): State<AppState>,
) -> Result<Response<SearchRestaurantsResponse>, ApiError> {
    let items = state
        .service
        .nearby_restaurants(query.menu.clone(), query.center())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRestaurantsResponse { items }))
}
