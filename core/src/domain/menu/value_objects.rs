use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::{RejectionKind, ValidationResult};

#[derive(Debug, Clone, Default)]
pub struct ValidateMenuInput {
    pub text: String,
    pub has_image: bool,
}

/// Caller-facing rendering of a [`ValidationResult`].
///
/// Accepted: `{ "ok": true, "tokens": [...] }`.
/// Rejected: `{ "ok": false, "kind": ..., "title": ..., "detail": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RejectionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<ValidationResult> for ValidationResponse {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Accepted { tokens } => Self {
                ok: true,
                tokens: Some(tokens),
                kind: None,
                title: None,
                detail: None,
            },
            ValidationResult::Rejected(rejection) => Self {
                ok: false,
                tokens: None,
                kind: Some(rejection.kind),
                title: Some(rejection.title),
                detail: Some(rejection.detail),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepted_response_shape() {
        let response = ValidationResponse::from(ValidationResult::Accepted {
            tokens: vec!["김밥".to_string()],
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "ok": true, "tokens": ["김밥"] })
        );
    }

    #[test]
    fn test_rejected_response_shape() {
        let response =
            ValidationResponse::from(ValidationResult::rejected(RejectionKind::NoInputProvided));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["ok"], json!(false));
        assert_eq!(value["kind"], json!("NO_INPUT_PROVIDED"));
        assert_eq!(value["title"], json!(RejectionKind::NoInputProvided.title()));
        assert!(value.get("tokens").is_none());
    }
}
