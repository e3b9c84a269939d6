use tracing::{debug, error};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    places::{
        entities::{GeoPoint, Place, PlaceSearch},
        keyword::extract_core_keyword,
        ports::{PlacesClient, PlacesService},
    },
    recommendation::ports::RecommendationClient,
    weather::ports::WeatherClient,
};

impl<W, RC, P> PlacesService for Service<W, RC, P>
where
    W: WeatherClient,
    RC: RecommendationClient,
    P: PlacesClient,
{
    async fn nearby_restaurants(
        &self,
        menu_name: String,
        center: GeoPoint,
    ) -> Result<Vec<Place>, CoreError> {
        if menu_name.trim().is_empty() {
            return Err(CoreError::InvalidInput("menu name is required".to_string()));
        }

        let keyword = extract_core_keyword(&menu_name);
        if keyword != menu_name {
            debug!("Refined search keyword {:?} -> {:?}", menu_name, keyword);
        }

        self.places_client
            .search_keyword(PlaceSearch::around(keyword, center))
            .await
            .map_err(|e| {
                error!("Place search failed: {}", e);
                e
            })
    }

    async fn address_of(&self, point: GeoPoint) -> Result<Option<String>, CoreError> {
        self.places_client.reverse_geocode(point).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        menu::MenuTokenValidator,
        places::{
            entities::{DEFAULT_SEARCH_RADIUS_METERS, DEFAULT_SEARCH_SIZE},
            ports::MockPlacesClient,
        },
        recommendation::ports::MockRecommendationClient,
        weather::ports::MockWeatherClient,
    };

    const CENTER: GeoPoint = GeoPoint {
        lat: 37.5665,
        lng: 126.978,
    };

    fn service(
        client: MockPlacesClient,
    ) -> Service<MockWeatherClient, MockRecommendationClient, MockPlacesClient> {
        Service::new(
            MenuTokenValidator::default(),
            Arc::new(MockWeatherClient::new()),
            Arc::new(MockRecommendationClient::new()),
            Arc::new(client),
        )
    }

    #[tokio::test]
    async fn test_search_uses_core_keyword_and_default_radius() {
        let mut client = MockPlacesClient::new();
        client
            .expect_search_keyword()
            .withf(|search| {
                search.keyword == "생선구이"
                    && search.radius_meters == DEFAULT_SEARCH_RADIUS_METERS
                    && search.size == DEFAULT_SEARCH_SIZE
                    && search.center == CENTER
            })
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![Place {
                        name: "바다식당".to_string(),
                        address: "서울 중구 세종대로 1".to_string(),
                        phone: None,
                        lat: 37.567,
                        lng: 126.979,
                        distance_meters: Some(120),
                        place_url: None,
                    }])
                })
            });

        let places = service(client)
            .nearby_restaurants("따뜻한 생선구이 정식".to_string(), CENTER)
            .await
            .unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "바다식당");
    }

    #[tokio::test]
    async fn test_search_requires_menu_name() {
        let mut client = MockPlacesClient::new();
        client.expect_search_keyword().never();

        let result = service(client)
            .nearby_restaurants(" ".to_string(), CENTER)
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_address_of_delegates_to_provider() {
        let mut client = MockPlacesClient::new();
        client
            .expect_reverse_geocode()
            .times(1)
            .returning(|_| Box::pin(async { Ok(Some("서울 중구 태평로1가".to_string())) }));

        let address = service(client).address_of(CENTER).await.unwrap();
        assert_eq!(address.as_deref(), Some("서울 중구 태평로1가"));
    }
}
