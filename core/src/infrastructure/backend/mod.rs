pub mod lunch_backend_client;

pub use lunch_backend_client::LunchBackendClient;
