pub mod auth;
mod sqlite_user_store;
mod user_manager;
pub mod user_models;
mod user_store;

pub use auth::CatalogHasher;
pub use sqlite_user_store::{SqliteUserStore, USER_VERSIONED_SCHEMAS};
pub use user_manager::UserManager;
pub use user_models::{RegistrationError, User, UserRole};
pub use user_store::UserStore;
