//! Movie <-> Actor association.
//!
//! A movie's cast set is the only stored side of the relation. Filmographies
//! are answered from it on demand, so the two directions cannot drift apart.

use super::error::{CatalogError, CatalogResult};
use crate::catalog_store::{Actor, ActorId, ActorStore, Movie, MovieId, MovieStore};

/// Returns `movie` with every actor in `actor_ids` added to its cast.
///
/// Each id is resolved against `actors` before anything changes; the first
/// one that does not resolve fails the call with `UnknownActor` and the input
/// movie is untouched. Actors already in the cast are kept once.
/// Nothing is written to storage.
pub fn attach_cast<S: ActorStore + ?Sized>(
    movie: &Movie,
    actor_ids: &[ActorId],
    actors: &S,
) -> CatalogResult<Movie> {
    let mut cast = movie.cast.clone();
    for &actor_id in actor_ids {
        if cast.contains(&actor_id) {
            continue;
        }
        if actors.get_actor(actor_id)?.is_none() {
            return Err(CatalogError::UnknownActor(actor_id));
        }
        cast.insert(actor_id);
    }

    Ok(Movie {
        cast,
        ..movie.clone()
    })
}

/// Ids of the movies whose cast contains `actor_id`.
pub fn filmography<S: MovieStore + ?Sized>(
    actor_id: ActorId,
    movies: &S,
) -> CatalogResult<Vec<MovieId>> {
    Ok(movies.movie_ids_with_actor(actor_id)?)
}

/// Resolves the cast of `movie` to actor records, in actor id order.
pub fn resolve_cast<S: ActorStore + ?Sized>(movie: &Movie, actors: &S) -> CatalogResult<Vec<Actor>> {
    let mut resolved = Vec::with_capacity(movie.cast.len());
    for &actor_id in &movie.cast {
        match actors.get_actor(actor_id)? {
            Some(actor) => resolved.push(actor),
            None => return Err(CatalogError::UnknownActor(actor_id)),
        }
    }
    Ok(resolved)
}
