use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    places::ports::PlacesClient,
    recommendation::ports::RecommendationClient,
    weather::{
        entities::{Weather, WeatherQuery},
        ports::{WeatherClient, WeatherService},
    },
};

impl<W, RC, P> WeatherService for Service<W, RC, P>
where
    W: WeatherClient,
    RC: RecommendationClient,
    P: PlacesClient,
{
    async fn current_weather(&self, query: WeatherQuery) -> Result<Weather, CoreError> {
        if query.location.trim().is_empty() && query.coordinates().is_none() {
            return Err(CoreError::InvalidInput(
                "location or coordinates are required".to_string(),
            ));
        }

        self.weather_client.get_weather(query).await.map_err(|e| {
            tracing::error!("Failed to fetch weather: {}", e);
            e
        })
    }
}
