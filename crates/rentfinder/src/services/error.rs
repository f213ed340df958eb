use thiserror::Error;

use rentfinder_core::auth::AuthError;
use rentfinder_core::portfolio::PortfolioError;

/// Errors surfaced to callers of the portfolio services.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Auth storage error: {0}")]
    AuthStorage(String),
}

impl ServiceError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

impl From<PortfolioError> for ServiceError {
    fn from(err: PortfolioError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Serialization(err.to_string())
    }
}

impl From<AuthError> for ServiceError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAuthenticated => ServiceError::NotAuthenticated,
            AuthError::InvalidCredentials => ServiceError::Validation(err.to_string()),
            AuthError::Storage(message) => ServiceError::AuthStorage(message),
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
