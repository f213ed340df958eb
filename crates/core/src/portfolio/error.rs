use thiserror::Error;

/// Validation errors for portfolio records.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PortfolioError {
    #[error("Property title cannot be empty")]
    EmptyTitle,
    #[error("Property address cannot be empty")]
    EmptyAddress,
    #[error("Rent must be a non-negative amount, got {0}")]
    InvalidRent(f64),
    #[error("Applicant email is invalid: {0}")]
    InvalidEmail(String),
    #[error("Credit score {0} is outside 300..=850")]
    InvalidCreditScore(u32),
    #[error("Maintenance request needs a property, a tenant and a title")]
    IncompleteRequest,
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
    #[error("Unknown priority: {0}")]
    UnknownPriority(String),
    #[error("Message needs a tenant and some content")]
    EmptyMessage,
    #[error("Unknown message type: {0}")]
    UnknownMessageType(String),
    #[error("Unknown sender: {0}")]
    UnknownSender(String),
}
