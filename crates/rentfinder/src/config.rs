use std::env;

use crate::auth::DEFAULT_AUTH_KEY;
use crate::store::DEFAULT_DB_KEY;

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the SQLite file holding the slots (default: "rentfinder.db")
    pub db_path: String,
    /// Slot key of the database blob (default: "rentfinder_db")
    pub db_key: String,
    /// Slot key of the signed-in user (default: "auth_user")
    pub auth_key: String,
    /// Keep everything in memory; nothing survives the process (default: false)
    pub in_memory: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RENTFINDER_DB_PATH` - SQLite database path (default: "rentfinder.db")
    /// - `RENTFINDER_DB_KEY` - database slot key (default: "rentfinder_db")
    /// - `RENTFINDER_AUTH_KEY` - current user slot key (default: "auth_user")
    /// - `RENTFINDER_IN_MEMORY` - `true` or `1` to skip the SQLite file (default: false)
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("RENTFINDER_DB_PATH").unwrap_or_else(|_| "rentfinder.db".to_string()),
            db_key: env::var("RENTFINDER_DB_KEY").unwrap_or_else(|_| DEFAULT_DB_KEY.to_string()),
            auth_key: env::var("RENTFINDER_AUTH_KEY")
                .unwrap_or_else(|_| DEFAULT_AUTH_KEY.to_string()),
            in_memory: env::var("RENTFINDER_IN_MEMORY")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
