pub mod get_weather;
