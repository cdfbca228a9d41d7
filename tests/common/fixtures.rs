//! Test fixture creation for catalog and user databases

use super::constants::*;
use anyhow::Result;
use chrono::NaiveDate;
use movie_catalog_server::catalog_store::{ActorStore, MovieFields, MovieStore, SqliteCatalogStore};
use movie_catalog_server::user::{SqliteUserStore, UserManager};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn movie_fields(name: &str, category: &str, rating: f32, date: (i32, u32, u32)) -> MovieFields {
    MovieFields {
        name: name.to_string(),
        release_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        category: category.to_string(),
        description: format!("{} description", name),
        image: format!("/images/{}.jpg", name.to_lowercase().replace(' ', "-")),
        rating,
    }
}

/// Creates a temporary catalog with 3 actors and 4 movies.
/// Returns (temp_dir, catalog_db_path)
pub fn create_test_catalog() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let catalog_db_path = dir.path().join("catalog.db");
    let store = SqliteCatalogStore::new(&catalog_db_path)?;

    for name in [ACTOR_BALE_NAME, ACTOR_CAINE_NAME, ACTOR_PACINO_NAME] {
        store.insert_actor(name)?;
    }

    store.insert_movie(
        &movie_fields(MOVIE_BATMAN_NAME, "Action", 8.2, (2005, 6, 15)),
        &BTreeSet::from([ACTOR_BALE_ID, ACTOR_CAINE_ID]),
    )?;
    store.insert_movie(
        &movie_fields(MOVIE_HEAT_NAME, "Crime", 8.3, (1995, 12, 15)),
        &BTreeSet::from([ACTOR_PACINO_ID]),
    )?;
    store.insert_movie(
        &movie_fields(MOVIE_PRESTIGE_NAME, "Drama", 8.5, (2006, 10, 20)),
        &BTreeSet::from([ACTOR_BALE_ID, ACTOR_CAINE_ID]),
    )?;
    store.insert_movie(
        &movie_fields(MOVIE_COMBAT_NAME, "drama", 6.5, (1998, 3, 1)),
        &BTreeSet::new(),
    )?;

    Ok((dir, catalog_db_path))
}

/// Creates a temporary user database with the test user registered.
/// Returns (temp_dir, user_db_path)
pub fn create_test_db_with_users() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("user.db");
    let store = Arc::new(SqliteUserStore::new(&db_path)?);

    UserManager::new(store).register(TEST_USER, TEST_PASS)?;

    Ok((dir, db_path))
}
