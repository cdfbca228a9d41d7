//! Catalog models shared by the store adapters and the catalog engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Generated identity key of a movie.
pub type MovieId = i64;

/// Generated identity key of an actor.
pub type ActorId = i64;

// =============================================================================
// Core Entities
// =============================================================================

/// Scalar fields of a movie, everything except identity and cast.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFields {
    pub name: String,
    pub release_date: NaiveDate,
    pub category: String,
    pub description: String,
    pub image: String,
    pub rating: f32,
}

/// Movie entity.
///
/// The cast set is the single source of truth for the movie/actor relation,
/// an actor's filmography is always derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(flatten)]
    pub fields: MovieFields,
    pub cast: BTreeSet<ActorId>,
}

impl Movie {
    pub fn new(id: MovieId, fields: MovieFields, cast: BTreeSet<ActorId>) -> Self {
        Movie { id, fields, cast }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn category(&self) -> &str {
        &self.fields.category
    }
}

/// Actor entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
}

// =============================================================================
// Resolved/Composite Types (API Responses)
// =============================================================================

/// Movie together with its resolved cast, ordered by actor id.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedMovie {
    pub movie: Movie,
    pub cast: Vec<Actor>,
}

/// Actor together with the ids of the movies whose cast contains it.
#[derive(Clone, Debug, Serialize)]
pub struct ActorWithFilmography {
    pub actor: Actor,
    pub filmography: Vec<MovieId>,
}
