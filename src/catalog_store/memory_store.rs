//! In-memory catalog store, backing the catalog engine and router tests.

use super::models::*;
use super::trait_def::{ActorStore, MovieStore};
use anyhow::{anyhow, bail, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct MemoryState {
    movies: BTreeMap<MovieId, Movie>,
    actors: BTreeMap<ActorId, Actor>,
    last_movie_id: MovieId,
    last_actor_id: ActorId,
}

impl MemoryState {
    fn check_cast(&self, cast: &BTreeSet<ActorId>) -> Result<()> {
        if let Some(missing) = cast.iter().find(|id| !self.actors.contains_key(id)) {
            bail!("Actor {} does not exist", missing);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCatalogStore {
    state: Mutex<MemoryState>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| anyhow!("Catalog state mutex poisoned"))
    }
}

impl MovieStore for InMemoryCatalogStore {
    fn list_movies(&self) -> Result<Vec<Movie>> {
        Ok(self.lock()?.movies.values().cloned().collect())
    }

    fn get_movie(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(self.lock()?.movies.get(&id).cloned())
    }

    fn insert_movie(&self, fields: &MovieFields, cast: &BTreeSet<ActorId>) -> Result<Movie> {
        let mut state = self.lock()?;
        state.check_cast(cast)?;

        state.last_movie_id += 1;
        let movie = Movie::new(state.last_movie_id, fields.clone(), cast.clone());
        state.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    fn replace_movie(&self, movie: &Movie) -> Result<Option<Movie>> {
        let mut state = self.lock()?;
        if !state.movies.contains_key(&movie.id) {
            return Ok(None);
        }
        state.check_cast(&movie.cast)?;
        state.movies.insert(movie.id, movie.clone());
        Ok(Some(movie.clone()))
    }

    fn update_movie_fields(&self, id: MovieId, fields: &MovieFields) -> Result<Option<Movie>> {
        let mut state = self.lock()?;
        Ok(state.movies.get_mut(&id).map(|movie| {
            movie.fields = fields.clone();
            movie.clone()
        }))
    }

    fn delete_movie(&self, id: MovieId) -> Result<bool> {
        Ok(self.lock()?.movies.remove(&id).is_some())
    }

    fn movie_ids_with_actor(&self, actor_id: ActorId) -> Result<Vec<MovieId>> {
        Ok(self
            .lock()?
            .movies
            .values()
            .filter(|m| m.cast.contains(&actor_id))
            .map(|m| m.id)
            .collect())
    }

    fn get_movies_count(&self) -> Result<usize> {
        Ok(self.lock()?.movies.len())
    }
}

impl ActorStore for InMemoryCatalogStore {
    fn list_actors(&self) -> Result<Vec<Actor>> {
        Ok(self.lock()?.actors.values().cloned().collect())
    }

    fn get_actor(&self, id: ActorId) -> Result<Option<Actor>> {
        Ok(self.lock()?.actors.get(&id).cloned())
    }

    fn insert_actor(&self, name: &str) -> Result<Actor> {
        let mut state = self.lock()?;
        state.last_actor_id += 1;
        let actor = Actor {
            id: state.last_actor_id,
            name: name.to_owned(),
        };
        state.actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    fn replace_actor(&self, actor: &Actor) -> Result<Option<Actor>> {
        let mut state = self.lock()?;
        match state.actors.get_mut(&actor.id) {
            Some(existing) => {
                *existing = actor.clone();
                Ok(Some(actor.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_actor(&self, id: ActorId) -> Result<bool> {
        let mut state = self.lock()?;
        if state.actors.remove(&id).is_none() {
            return Ok(false);
        }
        for movie in state.movies.values_mut() {
            movie.cast.remove(&id);
        }
        Ok(true)
    }

    fn get_actors_count(&self) -> Result<usize> {
        Ok(self.lock()?.actors.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> MovieFields {
        MovieFields {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn ids_are_generated_from_one() {
        let store = InMemoryCatalogStore::new();
        assert_eq!(store.insert_actor("A").unwrap().id, 1);
        assert_eq!(store.insert_actor("B").unwrap().id, 2);
        assert_eq!(
            store.insert_movie(&fields("M"), &BTreeSet::new()).unwrap().id,
            1
        );
    }

    #[test]
    fn field_update_leaves_cast_alone() {
        let store = InMemoryCatalogStore::new();
        let actor = store.insert_actor("A").unwrap();
        let movie = store
            .insert_movie(&fields("M"), &BTreeSet::from([actor.id]))
            .unwrap();

        let updated = store
            .update_movie_fields(movie.id, &fields("N"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.name(), "N");
        assert_eq!(updated.cast, BTreeSet::from([actor.id]));
        assert!(store.update_movie_fields(42, &fields("X")).unwrap().is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = InMemoryCatalogStore::new();
        let first = store.insert_actor("A").unwrap();
        store.delete_actor(first.id).unwrap();
        assert_eq!(store.insert_actor("B").unwrap().id, 2);
    }

    #[test]
    fn rejects_unknown_cast_members() {
        let store = InMemoryCatalogStore::new();
        assert!(store
            .insert_movie(&fields("M"), &BTreeSet::from([5]))
            .is_err());
        assert_eq!(store.get_movies_count().unwrap(), 0);

        let actor = store.insert_actor("A").unwrap();
        let mut movie = store
            .insert_movie(&fields("M"), &BTreeSet::from([actor.id]))
            .unwrap();
        movie.cast.insert(77);
        assert!(store.replace_movie(&movie).is_err());
        assert_eq!(
            store.get_movie(movie.id).unwrap().unwrap().cast,
            BTreeSet::from([actor.id])
        );
    }

    #[test]
    fn delete_actor_strips_casts() {
        let store = InMemoryCatalogStore::new();
        let a = store.insert_actor("A").unwrap();
        let movie = store
            .insert_movie(&fields("M"), &BTreeSet::from([a.id]))
            .unwrap();

        assert!(store.delete_actor(a.id).unwrap());
        assert!(store.get_movie(movie.id).unwrap().unwrap().cast.is_empty());
        assert!(store.movie_ids_with_actor(a.id).unwrap().is_empty());
    }

    #[test]
    fn replace_missing_records_returns_none() {
        let store = InMemoryCatalogStore::new();
        let actor = Actor {
            id: 3,
            name: "Nobody".to_string(),
        };
        assert!(store.replace_actor(&actor).unwrap().is_none());
        assert!(store
            .replace_movie(&Movie::new(3, fields("M"), BTreeSet::new()))
            .unwrap()
            .is_none());
    }
}
