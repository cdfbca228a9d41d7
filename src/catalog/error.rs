use crate::catalog_store::ActorId;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Movie,
    Actor,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Movie => write!(f, "movie"),
            EntityKind::Actor => write!(f, "actor"),
        }
    }
}

/// Failures surfaced by the catalog engine.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    #[error("unknown actor {0}")]
    UnknownActor(ActorId),

    #[error("malformed identifier {0:?}")]
    MalformedIdentifier(String),

    #[error("catalog store failure: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn movie_not_found(id: i64) -> Self {
        CatalogError::NotFound {
            entity: EntityKind::Movie,
            id,
        }
    }

    pub fn actor_not_found(id: i64) -> Self {
        CatalogError::NotFound {
            entity: EntityKind::Actor,
            id,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
