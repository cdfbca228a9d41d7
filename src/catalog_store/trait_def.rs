//! Entity store trait definitions.
//!
//! These traits are the persistence boundary of the catalog engine. Absence
//! is reported as `Ok(None)` / `Ok(false)`, errors are reserved for failures
//! of the backing store itself.

use super::models::{Actor, ActorId, Movie, MovieFields, MovieId};
use anyhow::Result;
use std::collections::BTreeSet;

/// Storage of movie records and their cast rows.
pub trait MovieStore: Send + Sync {
    /// Returns every movie in storage order.
    fn list_movies(&self) -> Result<Vec<Movie>>;

    /// Returns the movie with the given id, if any.
    fn get_movie(&self, id: MovieId) -> Result<Option<Movie>>;

    /// Inserts a new movie and returns it with its generated id.
    /// Fails if any cast id does not reference an existing actor.
    fn insert_movie(&self, fields: &MovieFields, cast: &BTreeSet<ActorId>) -> Result<Movie>;

    /// Replaces the full record (fields and cast) of an existing movie.
    /// Returns Ok(None) if no movie has that id.
    fn replace_movie(&self, movie: &Movie) -> Result<Option<Movie>>;

    /// Replaces only the scalar fields of an existing movie, leaving its cast
    /// as currently stored. Returns Ok(None) if no movie has that id.
    fn update_movie_fields(&self, id: MovieId, fields: &MovieFields) -> Result<Option<Movie>>;

    /// Deletes a movie and its cast rows.
    /// Returns Ok(false) if no movie has that id.
    fn delete_movie(&self, id: MovieId) -> Result<bool>;

    /// Returns the ids of all movies whose cast contains the actor.
    fn movie_ids_with_actor(&self, actor_id: ActorId) -> Result<Vec<MovieId>>;

    /// Number of stored movies.
    fn get_movies_count(&self) -> Result<usize>;
}

/// Storage of actor records.
pub trait ActorStore: Send + Sync {
    /// Returns every actor in storage order.
    fn list_actors(&self) -> Result<Vec<Actor>>;

    /// Returns the actor with the given id, if any.
    fn get_actor(&self, id: ActorId) -> Result<Option<Actor>>;

    /// Inserts a new actor and returns it with its generated id.
    fn insert_actor(&self, name: &str) -> Result<Actor>;

    /// Replaces an existing actor.
    /// Returns Ok(None) if no actor has that id.
    fn replace_actor(&self, actor: &Actor) -> Result<Option<Actor>>;

    /// Deletes an actor, removing it from every cast it belongs to.
    /// Returns Ok(false) if no actor has that id.
    fn delete_actor(&self, id: ActorId) -> Result<bool>;

    /// Number of stored actors.
    fn get_actors_count(&self) -> Result<usize>;
}

/// A store able to hold the whole catalog.
pub trait CatalogStore: MovieStore + ActorStore {}

impl<T: MovieStore + ActorStore> CatalogStore for T {}
