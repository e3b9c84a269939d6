use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{
        entities::{
            PreferenceOutcome, PreferenceRecommendation, Recipe, RecommendationOutcome,
            SubmissionOutcome,
        },
        value_objects::{
            CafeteriaRecommendationRequest, PreferenceRecommendationRequest, RecipeRequest,
            SubmitMenuInput,
        },
    },
};

/// Client for the LLM-backed recommendation service
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationClient: Send + Sync {
    fn recommend_from_cafeteria(
        &self,
        request: CafeteriaRecommendationRequest,
    ) -> impl Future<Output = Result<RecommendationOutcome, CoreError>> + Send;

    fn recommend_from_preferences(
        &self,
        request: PreferenceRecommendationRequest,
    ) -> impl Future<Output = Result<PreferenceRecommendation, CoreError>> + Send;

    fn get_recipe(
        &self,
        request: RecipeRequest,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}

/// Cafeteria submission flow. Downstream failures never escape
/// `submit_cafeteria_menu`; they come back as a transient-failure outcome.
pub trait LunchService: Send + Sync {
    fn submit_cafeteria_menu(
        &self,
        input: SubmitMenuInput,
    ) -> impl Future<Output = SubmissionOutcome> + Send;

    /// Malformed preferences are an error; a failing backend is a transient-failure outcome.
    fn recommend_from_preferences(
        &self,
        request: PreferenceRecommendationRequest,
    ) -> impl Future<Output = Result<PreferenceOutcome, CoreError>> + Send;

    fn recipe_for(
        &self,
        request: RecipeRequest,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}
