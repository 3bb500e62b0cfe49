use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Page source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, PaginationError>;

impl PaginationError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PaginationError::Validation(_))
    }
}
