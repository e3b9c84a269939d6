use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParseMenuValidator {
    #[validate(length(max = 10000, message = "text is too long"))]
    #[serde(default)]
    pub text: String,

    /// Name of an uploaded menu image, merged into the tokens.
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ImageMetadata {
    #[validate(length(min = 1, message = "file_name is required"))]
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ValidateMenuValidator {
    #[validate(length(max = 10000, message = "text is too long"))]
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub has_image: bool,

    #[validate(nested)]
    #[serde(default)]
    pub image: Option<ImageMetadata>,
}
