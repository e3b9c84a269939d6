pub mod health;
pub mod menu;
pub mod places;
pub mod recommendation;
pub mod roulette;
pub mod server;
pub mod weather;
