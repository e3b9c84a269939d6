use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    weather::entities::{Weather, WeatherQuery},
};

/// Client for the weather lookup service
#[cfg_attr(test, mockall::automock)]
pub trait WeatherClient: Send + Sync {
    fn get_weather(
        &self,
        query: WeatherQuery,
    ) -> impl Future<Output = Result<Weather, CoreError>> + Send;
}

pub trait WeatherService: Send + Sync {
    fn current_weather(
        &self,
        query: WeatherQuery,
    ) -> impl Future<Output = Result<Weather, CoreError>> + Send;
}
