use super::user_models::{RegistrationError, User};
use anyhow::Result;

pub trait UserStore: Send + Sync {
    /// Stores a new user and returns its id.
    /// Returns Err(Conflict) if the username is already taken; uniqueness is
    /// enforced by the store.
    fn register_user(&self, user: &User) -> Result<usize, RegistrationError>;

    /// Returns the user with the given username.
    /// Returns Ok(None) if the user does not exist.
    fn get_user(&self, username: &str) -> Result<Option<User>>;

    /// Number of registered users.
    fn get_users_count(&self) -> Result<usize>;
}
