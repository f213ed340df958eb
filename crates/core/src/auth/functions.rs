use super::{AuthError, AuthUser, UserMetadata, MIN_PASSWORD_LEN};

/// Trim and lowercase an email so the same address maps to the same user.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Extract username from email if no name provided.
pub fn email_to_name(email: &str) -> String {
    match email.split('@').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "User".to_string(),
    }
}

/// Accepts any non-empty email with a password of at least six characters.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(())
}

/// Builds the user record for an email. The id is the normalized email,
/// so ownership stamps stay stable across sign-ins.
pub fn user_for_email(email: &str) -> AuthUser {
    let email = normalize_email(email);
    AuthUser {
        id: email.clone(),
        user_metadata: UserMetadata {
            name: email_to_name(&email),
        },
        email,
    }
}
