//! Movie Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod catalog_store;
pub mod config;
pub mod server;
pub mod sqlite_persistence;
pub mod user;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, CatalogService};
pub use catalog_store::{CatalogStore, InMemoryCatalogStore, SqliteCatalogStore};
pub use server::{run_server, RequestsLoggingLevel};
pub use user::{SqliteUserStore, UserRole, UserStore};
