use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    common::services::Service,
    menu::{
        entities::{RejectionKind, ValidationResult},
        lexical::{has_lexical_substance, is_jamo_only},
        parser,
        ports::MenuService,
        tables::ClassificationTables,
        value_objects::ValidateMenuInput,
    },
    places::ports::PlacesClient,
    recommendation::ports::RecommendationClient,
    weather::ports::WeatherClient,
};

/// Decides whether free-text cafeteria menu input names at least one dish.
///
/// Stateless apart from the shared tables, so a single instance can serve any
/// number of concurrent callers.
#[derive(Debug, Clone)]
pub struct MenuTokenValidator {
    tables: Arc<ClassificationTables>,
}

impl MenuTokenValidator {
    pub fn new(tables: Arc<ClassificationTables>) -> Self {
        Self { tables }
    }

    pub fn parse(&self, raw: &str) -> Vec<String> {
        parser::parse(raw)
    }

    pub fn is_valid_token(&self, token: &str) -> bool {
        let normalized = parser::normalize_token(token);
        let token = normalized.as_str();

        if token.is_empty() {
            return false;
        }

        // Negative terms win over every other table.
        if self.tables.is_negative(token) {
            debug!("Token {:?} rejected: negative term", token);
            return false;
        }

        if is_jamo_only(token) {
            debug!("Token {:?} rejected: jamo only", token);
            return false;
        }

        if !has_lexical_substance(token) {
            debug!("Token {:?} rejected: too short", token);
            return false;
        }

        self.is_food_like(token)
    }

    pub fn is_food_like(&self, token: &str) -> bool {
        self.tables.is_known_food(token)
            || self.tables.has_food_suffix(token)
            || self.tables.contains_foreign_hint(&token.to_lowercase())
    }

    pub fn validate(&self, raw: &str, has_image: bool) -> ValidationResult {
        let tokens = self.parse(raw);
        let valid_tokens: Vec<String> = tokens
            .iter()
            .filter(|token| self.is_valid_token(token))
            .cloned()
            .collect();

        let result = if tokens.is_empty() && has_image {
            ValidationResult::rejected(RejectionKind::ImageOnlyUnsupported)
        } else if !tokens.is_empty() && valid_tokens.is_empty() {
            ValidationResult::rejected(RejectionKind::NoFoodTokenRecognized)
        } else if tokens.is_empty() {
            ValidationResult::rejected(RejectionKind::NoInputProvided)
        } else {
            ValidationResult::Accepted {
                tokens: valid_tokens,
            }
        };

        debug!(
            "Validated menu input: {} tokens, has_image={}, rejection={:?}",
            tokens.len(),
            has_image,
            result.rejection_kind()
        );

        result
    }

    pub fn validate_input(&self, input: &ValidateMenuInput) -> ValidationResult {
        self.validate(&input.text, input.has_image)
    }
}

impl Default for MenuTokenValidator {
    fn default() -> Self {
        Self::new(Arc::new(ClassificationTables::korean()))
    }
}

impl<W, RC, P> MenuService for Service<W, RC, P>
where
    W: WeatherClient,
    RC: RecommendationClient,
    P: PlacesClient,
{
    fn parse_menu(&self, raw: &str) -> Vec<String> {
        self.validator.parse(raw)
    }

    fn validate_menu(&self, input: ValidateMenuInput) -> ValidationResult {
        self.validator.validate_input(&input)
    }
}
