use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    places::entities::{GeoPoint, Place, PlaceSearch},
};

/// Client for the geocoding and places provider
#[cfg_attr(test, mockall::automock)]
pub trait PlacesClient: Send + Sync {
    /// Address of the coordinate, if the provider knows one.
    fn reverse_geocode(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn search_keyword(
        &self,
        search: PlaceSearch,
    ) -> impl Future<Output = Result<Vec<Place>, CoreError>> + Send;
}

pub trait PlacesService: Send + Sync {
    /// Restaurants serving `menu_name` around `center`, searched by its core keyword.
    fn nearby_restaurants(
        &self,
        menu_name: String,
        center: GeoPoint,
    ) -> impl Future<Output = Result<Vec<Place>, CoreError>> + Send;

    fn address_of(
        &self,
        point: GeoPoint,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}
