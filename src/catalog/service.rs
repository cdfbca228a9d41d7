//! Catalog service: search, the two-phase movie workflows and checked CRUD
//! over the catalog store.

use super::association::{attach_cast, filmography, resolve_cast};
use super::error::{CatalogError, CatalogResult};
use super::identifiers::parse_identifiers;
use super::query::{by_actor, by_category, by_name, MovieFilter, SearchRequest};
use super::sort::{sort_movies, SortKey};
use crate::catalog_store::{
    Actor, ActorId, ActorWithFilmography, CatalogStore, Movie, MovieFields, MovieId,
    ResolvedMovie,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Movie draft held by the caller between `begin_create` and `confirm_create`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PendingMovie {
    /// Raw cast text, e.g. `"1, 4, 9"`.
    pub cast_ref: String,
    #[serde(default)]
    pub fields: MovieFields,
}

pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        CatalogService { store }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Applies the one filter selected by `request`, then its sort key if it
    /// names a known one.
    pub fn search(&self, request: &SearchRequest) -> CatalogResult<Vec<Movie>> {
        let movies = self.store.list_movies()?;

        let filter = request.filter();
        let mut movies = match &filter {
            MovieFilter::Name(q) => by_name(movies, q),
            MovieFilter::Category(q) => by_category(movies, q),
            MovieFilter::Actor(q) => by_actor(movies, &self.store.list_actors()?, q),
            MovieFilter::All => movies,
        };

        if let Some(key) = request.order_by.as_deref().and_then(SortKey::parse) {
            sort_movies(&mut movies, key);
        }

        debug!("Search {:?} returned {} movies", filter, movies.len());
        Ok(movies)
    }

    pub fn list_movies(&self) -> CatalogResult<Vec<Movie>> {
        Ok(self.store.list_movies()?)
    }

    // =========================================================================
    // Movies
    // =========================================================================

    pub fn find_movie(&self, id: MovieId) -> CatalogResult<Movie> {
        self.store
            .get_movie(id)?
            .ok_or_else(|| CatalogError::movie_not_found(id))
    }

    pub fn find_resolved_movie(&self, id: MovieId) -> CatalogResult<ResolvedMovie> {
        let movie = self.find_movie(id)?;
        let cast = resolve_cast(&movie, self.store.as_ref())?;
        Ok(ResolvedMovie { movie, cast })
    }

    /// Wraps the raw cast text into an editable draft. Nothing is stored.
    pub fn begin_create(&self, cast_ref: impl Into<String>) -> PendingMovie {
        PendingMovie {
            cast_ref: cast_ref.into(),
            fields: MovieFields::default(),
        }
    }

    /// Stores the drafted movie with its cast.
    ///
    /// The cast text is parsed and every actor resolved before the insert; if
    /// either step fails no movie is stored.
    pub fn confirm_create(&self, draft: PendingMovie) -> CatalogResult<Movie> {
        let actor_ids = parse_identifiers(&draft.cast_ref)?;
        let unsaved = Movie::new(0, draft.fields, BTreeSet::new());
        let with_cast = attach_cast(&unsaved, &actor_ids, self.store.as_ref())?;

        let movie = self
            .store
            .insert_movie(&with_cast.fields, &with_cast.cast)?;
        info!(
            "Created movie {} '{}' with {} cast members",
            movie.id,
            movie.name(),
            movie.cast.len()
        );
        Ok(movie)
    }

    /// Replaces the scalar fields of a stored movie, keeping its cast.
    pub fn update_core(&self, id: MovieId, fields: MovieFields) -> CatalogResult<Movie> {
        self.find_movie(id)?;
        let updated = self
            .store
            .update_movie_fields(id, &fields)?
            .ok_or_else(|| CatalogError::movie_not_found(id))?;
        info!("Updated movie {} '{}'", updated.id, updated.name());
        Ok(updated)
    }

    /// Resolves `cast_text` and adds those actors to the stored movie's cast.
    /// Submitting the same text again leaves the cast as it is.
    pub fn attach_cast_then_confirm(&self, id: MovieId, cast_text: &str) -> CatalogResult<Movie> {
        let actor_ids = parse_identifiers(cast_text)?;
        let stored = self.find_movie(id)?;
        let updated = attach_cast(&stored, &actor_ids, self.store.as_ref())?;
        if updated.cast == stored.cast {
            return Ok(stored);
        }

        let movie = self
            .store
            .replace_movie(&updated)?
            .ok_or_else(|| CatalogError::movie_not_found(id))?;
        info!("Movie {} cast is now {:?}", id, movie.cast);
        Ok(movie)
    }

    pub fn delete_movie(&self, id: MovieId) -> CatalogResult<()> {
        self.find_movie(id)?;
        if !self.store.delete_movie(id)? {
            return Err(CatalogError::movie_not_found(id));
        }
        info!("Deleted movie {}", id);
        Ok(())
    }

    // =========================================================================
    // Actors
    // =========================================================================

    pub fn list_actors(&self) -> CatalogResult<Vec<Actor>> {
        Ok(self.store.list_actors()?)
    }

    pub fn create_actor(&self, name: &str) -> CatalogResult<Actor> {
        let actor = self.store.insert_actor(name)?;
        info!("Created actor {} '{}'", actor.id, actor.name);
        Ok(actor)
    }

    pub fn find_actor(&self, id: ActorId) -> CatalogResult<Actor> {
        self.store
            .get_actor(id)?
            .ok_or_else(|| CatalogError::actor_not_found(id))
    }

    pub fn find_actor_with_filmography(&self, id: ActorId) -> CatalogResult<ActorWithFilmography> {
        let actor = self.find_actor(id)?;
        let filmography = filmography(id, self.store.as_ref())?;
        Ok(ActorWithFilmography { actor, filmography })
    }

    pub fn update_actor(&self, actor: Actor) -> CatalogResult<Actor> {
        self.find_actor(actor.id)?;
        self.store
            .replace_actor(&actor)?
            .ok_or_else(|| CatalogError::actor_not_found(actor.id))
    }

    /// Deletes the actor and drops it from every cast it appears in.
    pub fn delete_actor(&self, id: ActorId) -> CatalogResult<()> {
        self.find_actor(id)?;
        if !self.store.delete_actor(id)? {
            return Err(CatalogError::actor_not_found(id));
        }
        info!("Deleted actor {}", id);
        Ok(())
    }

    pub fn movies_count(&self) -> CatalogResult<usize> {
        Ok(self.store.get_movies_count()?)
    }

    pub fn actors_count(&self) -> CatalogResult<usize> {
        Ok(self.store.get_actors_count()?)
    }
}
