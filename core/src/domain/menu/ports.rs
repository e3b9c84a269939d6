use crate::domain::menu::{entities::ValidationResult, value_objects::ValidateMenuInput};

/// Menu input use cases. Both operations are local and synchronous.
pub trait MenuService: Send + Sync {
    fn parse_menu(&self, raw: &str) -> Vec<String>;

    fn validate_menu(&self, input: ValidateMenuInput) -> ValidationResult;
}
