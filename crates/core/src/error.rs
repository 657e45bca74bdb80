use crate::types::DbId;
use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Every rule violation of a single payload, keyed by field name.
    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but does not own the target resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("invalid password")]
    InvalidPassword,

    #[error("product {0} does not belong to the admin")]
    ProductNotOwned(DbId),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] keyed by any displayable identifier.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
