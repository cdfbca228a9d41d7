//! SQLite-backed catalog store.
//!
//! All statements are parameterized; no SQL text is ever built from
//! caller-provided values.

use super::models::*;
use super::schema::CATALOG_VERSIONED_SCHEMAS;
use super::trait_def::{ActorStore, MovieStore};
use crate::sqlite_persistence::open_versioned;
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

const MOVIE_COLUMNS: &str = "id, name, release_date, category, description, image, rating";

/// SQLite-backed store for movies, actors and the cast relation.
#[derive(Clone)]
pub struct SqliteCatalogStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCatalogStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = open_versioned(db_path.as_ref(), CATALOG_VERSIONED_SCHEMAS)
            .context("Failed to open catalog database")?;

        let movie_count: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
        let actor_count: i64 = conn.query_row("SELECT COUNT(*) FROM actors", [], |r| r.get(0))?;
        info!(
            "Opened catalog: {} movies, {} actors",
            movie_count, actor_count
        );

        Ok(SqliteCatalogStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("Catalog connection mutex poisoned"))
    }

    // =========================================================================
    // Internal Helper Methods
    // =========================================================================

    fn parse_movie_fields(row: &rusqlite::Row) -> rusqlite::Result<(MovieId, MovieFields)> {
        Ok((
            row.get(0)?,
            MovieFields {
                name: row.get(1)?,
                release_date: row.get(2)?,
                category: row.get(3)?,
                description: row.get(4)?,
                image: row.get(5)?,
                rating: row.get::<_, f64>(6)? as f32,
            },
        ))
    }

    fn get_cast(conn: &Connection, movie_id: MovieId) -> Result<BTreeSet<ActorId>> {
        let mut stmt =
            conn.prepare_cached("SELECT actor_id FROM movie_actors WHERE movie_id = ?1")?;
        let cast = stmt
            .query_map(params![movie_id], |r| r.get(0))?
            .collect::<Result<BTreeSet<ActorId>, _>>()?;
        Ok(cast)
    }

    fn get_movie_inner(conn: &Connection, id: MovieId) -> Result<Option<Movie>> {
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM movies WHERE id = ?1",
            MOVIE_COLUMNS
        ))?;
        let fields = stmt
            .query_row(params![id], Self::parse_movie_fields)
            .optional()?;
        match fields {
            Some((id, fields)) => {
                let cast = Self::get_cast(conn, id)?;
                Ok(Some(Movie::new(id, fields, cast)))
            }
            None => Ok(None),
        }
    }

    /// Rewrites the scalar columns of one movie row; cast rows are untouched.
    fn update_fields_row(conn: &Connection, id: MovieId, fields: &MovieFields) -> Result<usize> {
        let updated = conn.execute(
            "UPDATE movies SET name = ?1, release_date = ?2, category = ?3, description = ?4,
                    image = ?5, rating = ?6
             WHERE id = ?7",
            params![
                &fields.name,
                &fields.release_date,
                &fields.category,
                &fields.description,
                &fields.image,
                fields.rating as f64,
                id
            ],
        )?;
        Ok(updated)
    }

    fn insert_cast_rows(
        tx: &Transaction,
        movie_id: MovieId,
        cast: &BTreeSet<ActorId>,
    ) -> Result<()> {
        let mut stmt = tx.prepare_cached(
            "INSERT OR IGNORE INTO movie_actors (movie_id, actor_id) VALUES (?1, ?2)",
        )?;
        for actor_id in cast {
            stmt.execute(params![movie_id, actor_id])
                .with_context(|| format!("Failed to add actor {} to movie {}", actor_id, movie_id))?;
        }
        Ok(())
    }
}

impl MovieStore for SqliteCatalogStore {
    fn list_movies(&self) -> Result<Vec<Movie>> {
        let conn = self.lock()?;

        let mut casts: HashMap<MovieId, BTreeSet<ActorId>> = HashMap::new();
        let mut cast_stmt = conn.prepare_cached("SELECT movie_id, actor_id FROM movie_actors")?;
        let rows = cast_stmt.query_map([], |r| Ok((r.get::<_, MovieId>(0)?, r.get(1)?)))?;
        for row in rows {
            let (movie_id, actor_id) = row?;
            casts.entry(movie_id).or_default().insert(actor_id);
        }

        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {} FROM movies ORDER BY id",
            MOVIE_COLUMNS
        ))?;
        let movies = stmt
            .query_map([], Self::parse_movie_fields)?
            .map(|row| {
                row.map(|(id, fields)| {
                    let cast = casts.remove(&id).unwrap_or_default();
                    Movie::new(id, fields, cast)
                })
            })
            .collect::<Result<Vec<Movie>, _>>()?;
        Ok(movies)
    }

    fn get_movie(&self, id: MovieId) -> Result<Option<Movie>> {
        let conn = self.lock()?;
        Self::get_movie_inner(&conn, id)
    }

    fn insert_movie(&self, fields: &MovieFields, cast: &BTreeSet<ActorId>) -> Result<Movie> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO movies (name, release_date, category, description, image, rating)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &fields.name,
                &fields.release_date,
                &fields.category,
                &fields.description,
                &fields.image,
                fields.rating as f64
            ],
        )
        .with_context(|| format!("Failed to insert movie {}", fields.name))?;
        let movie_id = tx.last_insert_rowid();
        Self::insert_cast_rows(&tx, movie_id, cast)?;
        tx.commit()?;

        debug!("Inserted movie {} with {} cast members", movie_id, cast.len());
        Ok(Movie::new(movie_id, fields.clone(), cast.clone()))
    }

    fn replace_movie(&self, movie: &Movie) -> Result<Option<Movie>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        if Self::update_fields_row(&tx, movie.id, &movie.fields)? == 0 {
            return Ok(None);
        }

        tx.execute(
            "DELETE FROM movie_actors WHERE movie_id = ?1",
            params![movie.id],
        )?;
        Self::insert_cast_rows(&tx, movie.id, &movie.cast)?;
        tx.commit()?;

        Ok(Some(movie.clone()))
    }

    fn update_movie_fields(&self, id: MovieId, fields: &MovieFields) -> Result<Option<Movie>> {
        let conn = self.lock()?;
        if Self::update_fields_row(&conn, id, fields)? == 0 {
            return Ok(None);
        }
        Self::get_movie_inner(&conn, id)
    }

    fn delete_movie(&self, id: MovieId) -> Result<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    fn movie_ids_with_actor(&self, actor_id: ActorId) -> Result<Vec<MovieId>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(
            "SELECT movie_id FROM movie_actors WHERE actor_id = ?1 ORDER BY movie_id",
        )?;
        let ids = stmt
            .query_map(params![actor_id], |r| r.get(0))?
            .collect::<Result<Vec<MovieId>, _>>()?;
        Ok(ids)
    }

    fn get_movies_count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}

impl ActorStore for SqliteCatalogStore {
    fn list_actors(&self) -> Result<Vec<Actor>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached("SELECT id, name FROM actors ORDER BY id")?;
        let actors = stmt
            .query_map([], |r| {
                Ok(Actor {
                    id: r.get(0)?,
                    name: r.get(1)?,
                })
            })?
            .collect::<Result<Vec<Actor>, _>>()?;
        Ok(actors)
    }

    fn get_actor(&self, id: ActorId) -> Result<Option<Actor>> {
        let conn = self.lock()?;
        let actor = conn
            .query_row(
                "SELECT id, name FROM actors WHERE id = ?1",
                params![id],
                |r| {
                    Ok(Actor {
                        id: r.get(0)?,
                        name: r.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(actor)
    }

    fn insert_actor(&self, name: &str) -> Result<Actor> {
        let conn = self.lock()?;
        conn.execute("INSERT INTO actors (name) VALUES (?1)", params![name])
            .with_context(|| format!("Failed to insert actor {}", name))?;
        Ok(Actor {
            id: conn.last_insert_rowid(),
            name: name.to_owned(),
        })
    }

    fn replace_actor(&self, actor: &Actor) -> Result<Option<Actor>> {
        let conn = self.lock()?;
        let updated = conn.execute(
            "UPDATE actors SET name = ?1 WHERE id = ?2",
            params![&actor.name, actor.id],
        )?;
        Ok((updated > 0).then(|| actor.clone()))
    }

    fn delete_actor(&self, id: ActorId) -> Result<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM actors WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }

    fn get_actors_count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM actors", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}
