pub mod get_address;
pub mod search_restaurants;
