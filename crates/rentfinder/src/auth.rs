//! Mock authentication provider.
//!
//! Keeps a single "current user" as JSON under its own slot key, separate
//! from the database blob. Credentials are checked with the rules in
//! [`rentfinder_core::auth`]; nothing is verified against a real account.

use std::sync::Arc;

use tracing::{info, warn};

use rentfinder_core::auth::{user_for_email, validate_credentials, AuthError, AuthUser, Result};
use rentfinder_core::storage::DurableSlot;

/// Slot key of the persisted current user.
pub const DEFAULT_AUTH_KEY: &str = "auth_user";

#[derive(Clone)]
pub struct MockAuth {
    slot: Arc<dyn DurableSlot>,
    key: Arc<str>,
}

impl MockAuth {
    pub fn new(slot: Arc<dyn DurableSlot>) -> Self {
        Self {
            slot,
            key: Arc::from(DEFAULT_AUTH_KEY),
        }
    }

    pub fn with_key(mut self, key: impl AsRef<str>) -> Self {
        self.key = Arc::from(key.as_ref());
        self
    }

    /// Validates the credentials and persists the user as signed in.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        validate_credentials(email, password)?;
        let user = user_for_email(email);
        let raw = serde_json::to_string(&user).map_err(|e| AuthError::Storage(e.to_string()))?;
        self.slot.write(&self.key, &raw).await?;
        info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// Validates the credentials and returns the would-be user without
    /// signing in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser> {
        validate_credentials(email, password)?;
        Ok(user_for_email(email))
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.slot.remove(&self.key).await?;
        info!("Signed out");
        Ok(())
    }

    /// The signed-in user. A corrupt record reads as signed out.
    pub async fn current_user(&self) -> Result<Option<AuthUser>> {
        let Some(raw) = self.slot.read(&self.key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!(key = %self.key, error = %err, "Stored user is corrupt, ignoring");
                Ok(None)
            }
        }
    }

    /// The signed-in user, or [`AuthError::NotAuthenticated`].
    pub async fn require_user(&self) -> Result<AuthUser> {
        self.current_user()
            .await?
            .ok_or(AuthError::NotAuthenticated)
    }
}

impl std::fmt::Debug for MockAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockAuth").field("key", &self.key).finish()
    }
}
