use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large")]
    FileTooLarge,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Failed to load classification tables: {0}")]
    TablesLoadError(String),

    #[error("Internal server error")]
    InternalServerError,
}
