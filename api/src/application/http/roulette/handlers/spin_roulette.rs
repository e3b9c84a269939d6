use crate::application::http::roulette::validators::SpinRouletteValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use lunchpick_core::domain::roulette::{RouletteWheel, SpinOutcome};
use tracing::debug;

#[utoipa::path(
    post,
    path = "/spin",
    tag = "roulette",
    summary = "Spin the lunch roulette",
    description = "Picks one of the recommended and daily menus uniformly at random and returns the rotation that lands the pointer on it.",
    responses(
        (status = 200, body = SpinOutcome),
        (status = 400, description = "No menus to spin")
    ),
    request_body = SpinRouletteValidator
)]
pub async fn spin_roulette(
    ValidateJson(payload): ValidateJson<SpinRouletteValidator>,
) -> Result<Response<SpinOutcome>, ApiError> {
    let wheel = RouletteWheel::from_recommendations(&payload.menus).with_daily(&payload.daily);

    let outcome = wheel
        .spin(&mut rand::thread_rng(), payload.current_rotation)
        .ok_or_else(|| ApiError::BadRequest("No menus to spin".to_string()))?;

    debug!(
        "Roulette landed on {} ({} of {})",
        outcome.entry.menu_name,
        outcome.index + 1,
        wheel.len()
    );

    Ok(Response::OK(outcome))
}
