use crate::application::http::{
    health::HealthApiDoc, menu::router::MenuApiDoc, places::router::PlacesApiDoc,
    recommendation::router::RecommendationApiDoc, roulette::router::RouletteApiDoc,
    weather::router::WeatherApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lunchpick API"
    ),
    nest(
        (path = "/menu", api = MenuApiDoc),
        (path = "/lunch", api = RecommendationApiDoc),
        (path = "/weather", api = WeatherApiDoc),
        (path = "/places", api = PlacesApiDoc),
        (path = "/roulette", api = RouletteApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
