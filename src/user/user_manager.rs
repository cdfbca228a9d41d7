use super::auth::CatalogHasher;
use super::user_models::{RegistrationError, User, UserRole};
use super::user_store::UserStore;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub struct UserManager {
    user_store: Arc<dyn UserStore>,
    hasher: CatalogHasher,
}

impl UserManager {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self {
            user_store,
            hasher: CatalogHasher::default(),
        }
    }

    /// Registers an enabled standard user with a hashed password.
    pub fn register<T: AsRef<str>>(
        &self,
        username: T,
        password: T,
    ) -> Result<usize, RegistrationError> {
        let username = username.as_ref().trim();
        if username.is_empty() {
            return Err(RegistrationError::Validation(
                "The username cannot be empty.".to_string(),
            ));
        }
        if password.as_ref().is_empty() {
            return Err(RegistrationError::Validation(
                "The password cannot be empty.".to_string(),
            ));
        }

        let user = User {
            username: username.to_owned(),
            password_hash: self.hasher.hash(password.as_ref())?,
            hasher: self.hasher,
            enabled: true,
            role: UserRole::default(),
        };
        let user_id = self.user_store.register_user(&user)?;
        info!("Registered user {} with id {}", user.username, user_id);
        Ok(user_id)
    }

    /// Checks a username/password pair against the stored hash.
    /// Unknown and disabled users never match.
    pub fn verify_password(&self, username: &str, password: &str) -> Result<bool> {
        match self.user_store.get_user(username)? {
            Some(user) if user.enabled => user.hasher.verify(password, &user.password_hash),
            _ => Ok(false),
        }
    }

    pub fn users_count(&self) -> Result<usize> {
        self.user_store.get_users_count()
    }
}
