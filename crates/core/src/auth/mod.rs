mod error;
mod functions;
mod types;

pub use error::{AuthError, Result};
pub use functions::{email_to_name, normalize_email, user_for_email, validate_credentials};
pub use types::{AuthUser, UserMetadata, MIN_PASSWORD_LEN};
