use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password: use a valid email and a password of at least 6 characters")]
    InvalidCredentials,

    #[error("not signed in")]
    NotAuthenticated,

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<crate::storage::SlotError> for AuthError {
    fn from(err: crate::storage::SlotError) -> Self {
        AuthError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
