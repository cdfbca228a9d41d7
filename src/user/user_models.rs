use super::auth::CatalogHasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Standard,
    Admin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Standard => "standard",
            UserRole::Admin => "admin",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(UserRole::Standard),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// A registered account. `password_hash` is a PHC string, never the plain
/// password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    /// Algorithm that produced `password_hash`.
    pub hasher: CatalogHasher,
    pub enabled: bool,
    pub role: UserRole,
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("invalid registration: {0}")]
    Validation(String),

    #[error("username {0} is already taken")]
    Conflict(String),

    #[error("user store failure: {0:#}")]
    Store(#[from] anyhow::Error),
}
