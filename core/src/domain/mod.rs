pub mod common;
pub mod menu;
pub mod places;
pub mod recommendation;
pub mod roulette;
pub mod weather;
