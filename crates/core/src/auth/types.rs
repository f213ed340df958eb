use serde::{Deserialize, Serialize};

/// Shortest password the mock provider accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub name: String,
}

/// The signed-in user, as persisted under the auth slot key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    pub fn display_name(&self) -> &str {
        &self.user_metadata.name
    }
}
