use std::sync::Arc;

use crate::domain::{
    menu::MenuTokenValidator, places::ports::PlacesClient,
    recommendation::ports::RecommendationClient, weather::ports::WeatherClient,
};

/// Entry point for every use case, generic over the external collaborators.
pub struct Service<W, RC, P>
where
    W: WeatherClient,
    RC: RecommendationClient,
    P: PlacesClient,
{
    pub(crate) validator: MenuTokenValidator,
    pub(crate) weather_client: Arc<W>,
    pub(crate) recommendation_client: Arc<RC>,
    pub(crate) places_client: Arc<P>,
}

impl<W, RC, P> Service<W, RC, P>
where
    W: WeatherClient,
    RC: RecommendationClient,
    P: PlacesClient,
{
    pub fn new(
        validator: MenuTokenValidator,
        weather_client: Arc<W>,
        recommendation_client: Arc<RC>,
        places_client: Arc<P>,
    ) -> Self {
        Self {
            validator,
            weather_client,
            recommendation_client,
            places_client,
        }
    }
}

impl<W, RC, P> Clone for Service<W, RC, P>
where
    W: WeatherClient,
    RC: RecommendationClient,
    P: PlacesClient,
{
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            weather_client: Arc::clone(&self.weather_client),
            recommendation_client: Arc::clone(&self.recommendation_client),
            places_client: Arc::clone(&self.places_client),
        }
    }
}
