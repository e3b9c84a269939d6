use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    places::validators::GetAddressQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};
use lunchpick_core::domain::places::PlacesService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAddressResponse {
    pub address: Option<String>,
}

#[utoipa::path(
    get,
    path = "/address",
    tag = "places",
    summary = "Reverse geocode coordinates",
    params(GetAddressQuery),
    responses(
        (status = 200, body = GetAddressResponse)
    )
)]
pub async fn get_address(
    ValidateQuery(query): ValidateQuery<GetAddressQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetAddressResponse>, ApiError> {
    let address = state
        .service
        .address_of(query.point())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAddressResponse { address }))
}
