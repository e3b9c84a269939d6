use tracing::{error, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    menu::{entities::ValidationResult, parser::join_tokens},
    places::ports::PlacesClient,
    recommendation::{
        entities::{
            PreferenceOutcome, Recipe, RecommendationOutcome, SubmissionOutcome,
            TRANSIENT_FAILURE_MESSAGE,
        },
        ports::{LunchService, RecommendationClient},
        value_objects::{
            CafeteriaRecommendationRequest, PreferenceRecommendationRequest, RecipeRequest,
            SubmitMenuInput,
        },
    },
    weather::ports::WeatherClient,
};

impl<W, RC, P> LunchService for Service<W, RC, P>
where
    W: WeatherClient,
    RC: RecommendationClient,
    P: PlacesClient,
{
    async fn submit_cafeteria_menu(&self, input: SubmitMenuInput) -> SubmissionOutcome {
        // 1. Validate locally, nothing leaves the process for rejected input
        let tokens = match self.validator.validate(&input.text, input.has_image) {
            ValidationResult::Accepted { tokens } => tokens,
            ValidationResult::Rejected(rejection) => {
                info!("Menu submission rejected: {:?}", rejection.kind);
                return SubmissionOutcome::Rejected(rejection);
            }
        };

        // 2. Forward the accepted tokens in canonical form
        let request = CafeteriaRecommendationRequest {
            location: input.location,
            cafeteria_menu: join_tokens(&tokens),
            user_location: input.user_location,
            prefer_external: true,
        };

        info!(
            "Requesting recommendations for {} menu tokens in {}",
            tokens.len(),
            request.location
        );

        // 3. Downstream failures become a banner message
        match self
            .recommendation_client
            .recommend_from_cafeteria(request)
            .await
        {
            Ok(RecommendationOutcome::Recommendations(recommendation)) => {
                SubmissionOutcome::Recommended(recommendation)
            }
            Ok(RecommendationOutcome::NeedMoreInfo(need_more_info)) => {
                info!(
                    "Recommendation service needs more info: {:?}",
                    need_more_info.missing
                );
                SubmissionOutcome::NeedMoreInfo(need_more_info)
            }
            Err(e) => {
                error!("Failed to get recommendation: {}", e);
                SubmissionOutcome::TransientFailure {
                    message: TRANSIENT_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }

    async fn recommend_from_preferences(
        &self,
        request: PreferenceRecommendationRequest,
    ) -> Result<PreferenceOutcome, CoreError> {
        if request.location.trim().is_empty() {
            return Err(CoreError::InvalidInput("location is required".to_string()));
        }

        if request.num_people == 0 {
            return Err(CoreError::InvalidInput(
                "num_people must be at least 1".to_string(),
            ));
        }

        if let Some(moods) = &request.moods
            && moods.len() > request.num_people as usize
        {
            return Err(CoreError::InvalidInput(format!(
                "{} moods given for {} people",
                moods.len(),
                request.num_people
            )));
        }

        info!(
            "Requesting preference recommendation in {} for {} people ({}, {})",
            request.location, request.num_people, request.food_type, request.mood
        );

        match self
            .recommendation_client
            .recommend_from_preferences(request)
            .await
        {
            Ok(recommendation) => Ok(PreferenceOutcome::Recommended(recommendation)),
            Err(e) => {
                error!("Failed to get preference recommendation: {}", e);
                Ok(PreferenceOutcome::TransientFailure {
                    message: TRANSIENT_FAILURE_MESSAGE.to_string(),
                })
            }
        }
    }

    async fn recipe_for(&self, request: RecipeRequest) -> Result<Recipe, CoreError> {
        if request.menu_name.trim().is_empty() {
            return Err(CoreError::InvalidInput("menu_name is required".to_string()));
        }

        if request.num_servings == 0 {
            return Err(CoreError::InvalidInput(
                "num_servings must be at least 1".to_string(),
            ));
        }

        self.recommendation_client.get_recipe(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        menu::{MenuTokenValidator, entities::RejectionKind},
        places::ports::MockPlacesClient,
        recommendation::{
            entities::{
                CafeteriaRecommendation, NeedMoreInfo, PreferenceRecommendation, RecommendedMenu,
            },
            ports::MockRecommendationClient,
            value_objects::UserLocation,
        },
        weather::ports::MockWeatherClient,
    };

    fn service(
        client: MockRecommendationClient,
    ) -> Service<MockWeatherClient, MockRecommendationClient, MockPlacesClient> {
        Service::new(
            MenuTokenValidator::default(),
            Arc::new(MockWeatherClient::new()),
            Arc::new(client),
            Arc::new(MockPlacesClient::new()),
        )
    }

    fn input(text: &str, has_image: bool) -> SubmitMenuInput {
        SubmitMenuInput {
            text: text.to_string(),
            has_image,
            location: "서울".to_string(),
            user_location: Some(UserLocation {
                latitude: 37.5665,
                longitude: 126.978,
            }),
        }
    }

    fn recommendation() -> CafeteriaRecommendation {
        CafeteriaRecommendation {
            cafeteria_menu: "김치찌개, 파스타".to_string(),
            recommendations: vec![RecommendedMenu {
                menu_name: "부대찌개".to_string(),
                kind: "비슷한카테고리".to_string(),
                reason: "얼큰한 찌개".to_string(),
                display_name: None,
                restaurant_name: Some("찌개집".to_string()),
                price_range: Some("9,000원".to_string()),
                minutes_away: Some(5),
            }],
            weather_summary: None,
        }
    }

    #[tokio::test]
    async fn test_rejected_input_never_reaches_the_service() {
        let mut client = MockRecommendationClient::new();
        client.expect_recommend_from_cafeteria().never();

        let outcome = service(client)
            .submit_cafeteria_menu(input("", true))
            .await;

        let SubmissionOutcome::Rejected(rejection) = outcome else {
            panic!("expected a rejection");
        };
        assert_eq!(rejection.kind, RejectionKind::ImageOnlyUnsupported);
    }

    #[tokio::test]
    async fn test_only_valid_tokens_are_forwarded() {
        let mut client = MockRecommendationClient::new();
        client
            .expect_recommend_from_cafeteria()
            .withf(|request| {
                request.cafeteria_menu == "김치찌개, 파스타"
                    && request.location == "서울"
                    && request.prefer_external
                    && request.user_location.is_some()
            })
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(RecommendationOutcome::Recommendations(recommendation())) })
            });

        let outcome = service(client)
            .submit_cafeteria_menu(input("김치찌개\nㅋㅋ, 파스타, 김치찌개", false))
            .await;

        assert_eq!(outcome, SubmissionOutcome::Recommended(recommendation()));
    }

    #[tokio::test]
    async fn test_need_more_info_is_passed_through() {
        let mut client = MockRecommendationClient::new();
        client
            .expect_recommend_from_cafeteria()
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(RecommendationOutcome::NeedMoreInfo(NeedMoreInfo {
                        need_more_info: true,
                        missing: vec!["nearby_options".to_string()],
                        brief_rationale: None,
                    }))
                })
            });

        let outcome = service(client)
            .submit_cafeteria_menu(input("된장찌개", false))
            .await;

        let SubmissionOutcome::NeedMoreInfo(info) = outcome else {
            panic!("expected need_more_info");
        };
        assert_eq!(info.missing, vec!["nearby_options".to_string()]);
    }

    #[tokio::test]
    async fn test_downstream_failure_becomes_transient_failure() {
        let mut client = MockRecommendationClient::new();
        client
            .expect_recommend_from_cafeteria()
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError(
                        "connection refused".to_string(),
                    ))
                })
            });

        let outcome = service(client)
            .submit_cafeteria_menu(input("제육볶음", false))
            .await;

        assert_eq!(
            outcome,
            SubmissionOutcome::TransientFailure {
                message: TRANSIENT_FAILURE_MESSAGE.to_string()
            }
        );
    }

    fn preferences(num_people: u32, moods: Option<Vec<&str>>) -> PreferenceRecommendationRequest {
        PreferenceRecommendationRequest {
            location: "서울".to_string(),
            food_type: "한식".to_string(),
            mood: "피곤한".to_string(),
            num_people,
            moods: moods.map(|m| m.into_iter().map(str::to_string).collect()),
        }
    }

    fn preference_pick() -> PreferenceRecommendation {
        PreferenceRecommendation {
            menu: "갈비탕".to_string(),
            category: "한식".to_string(),
            reason: "영양 만점 보양식입니다".to_string(),
            temperature_match: None,
            alternatives: vec!["김치찌개".to_string(), "육개장".to_string()],
            weather_info: None,
        }
    }

    #[tokio::test]
    async fn test_preferences_are_forwarded() {
        let mut client = MockRecommendationClient::new();
        client
            .expect_recommend_from_preferences()
            .withf(|request| {
                request.food_type == "한식"
                    && request.num_people == 2
                    && request.moods.as_ref().map(Vec::len) == Some(2)
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(preference_pick()) }));

        let outcome = service(client)
            .recommend_from_preferences(preferences(2, Some(vec!["피곤한", "신나는"])))
            .await;

        assert_eq!(outcome, Ok(PreferenceOutcome::Recommended(preference_pick())));
    }

    #[tokio::test]
    async fn test_preference_backend_failure_becomes_transient_failure() {
        let mut client = MockRecommendationClient::new();
        client
            .expect_recommend_from_preferences()
            .times(1)
            .returning(|_| {
                Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
            });

        let outcome = service(client)
            .recommend_from_preferences(preferences(1, None))
            .await;

        assert_eq!(
            outcome,
            Ok(PreferenceOutcome::TransientFailure {
                message: TRANSIENT_FAILURE_MESSAGE.to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_preferences_never_reach_the_backend() {
        let mut client = MockRecommendationClient::new();
        client.expect_recommend_from_preferences().never();
        let service = service(client);

        let no_people = service
            .recommend_from_preferences(preferences(0, None))
            .await;
        assert!(matches!(no_people, Err(CoreError::InvalidInput(_))));

        let too_many_moods = service
            .recommend_from_preferences(preferences(1, Some(vec!["피곤한", "신나는"])))
            .await;
        assert!(matches!(too_many_moods, Err(CoreError::InvalidInput(_))));

        let mut nowhere = preferences(1, None);
        nowhere.location = "  ".to_string();
        assert!(matches!(
            service.recommend_from_preferences(nowhere).await,
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_recipe_requires_servings() {
        let mut client = MockRecommendationClient::new();
        client.expect_get_recipe().never();

        let result = service(client)
            .recipe_for(RecipeRequest {
                menu_name: "칼국수".to_string(),
                num_servings: 0,
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_recipe_is_fetched() {
        let mut client = MockRecommendationClient::new();
        client
            .expect_get_recipe()
            .withf(|request| request.menu_name == "칼국수" && request.num_servings == 2)
            .times(1)
            .returning(|request| {
                Box::pin(async move {
                    Ok(Recipe {
                        menu_name: request.menu_name,
                        servings: request.num_servings,
                        ingredients: vec![],
                        steps: vec!["면을 삶는다".to_string()],
                        cooking_time: Some("30분".to_string()),
                        difficulty: None,
                    })
                })
            });

        let recipe = service(client)
            .recipe_for(RecipeRequest {
                menu_name: "칼국수".to_string(),
                num_servings: 2,
            })
            .await
            .unwrap();

        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.steps.len(), 1);
    }
}
