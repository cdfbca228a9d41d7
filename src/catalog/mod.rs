//! Catalog relationship and query engine.

mod association;
mod error;
mod identifiers;
mod query;
mod service;
mod sort;

pub use association::{attach_cast, filmography, resolve_cast};
pub use error::{CatalogError, CatalogResult, EntityKind};
pub use identifiers::{parse_identifiers, IDENTIFIER_SEPARATOR};
pub use query::{by_actor, by_category, by_name, MovieFilter, SearchRequest};
pub use service::{CatalogService, PendingMovie};
pub use sort::{sort_movies, SortKey};
