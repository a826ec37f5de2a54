//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A form field failed validation.
    #[error("Invalid {field}: {message}")]
    ValidationError {
        field: &'static str,
        message: String,
    },

    /// Cart persistence failed.
    #[error("Cache error: {0}")]
    CacheError(#[from] shop_cache::CacheError),
}

impl CommerceError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CommerceError::ValidationError {
            field,
            message: message.into(),
        }
    }
}
