pub mod parse_menu;
pub mod validate_menu;
