pub mod spin_roulette;
