//! SQLite schema definitions for the movie catalog database.
//!
//! Movies and actors are keyed by integer rowids generated on insert. The cast
//! relation lives only in `movie_actors`; there is no stored back-reference
//! from actors to movies.

use crate::sqlite_column;
use crate::sqlite_persistence::{
    ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema, DEFAULT_TIMESTAMP,
};

const MOVIES_TABLE: Table = Table {
    name: "movies",
    columns: &[
        sqlite_column!(
            "id",
            &SqlType::Integer,
            is_primary_key = true,
            is_autoincrement = true
        ),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("release_date", &SqlType::Text, non_null = true), // '1995-12-15'
        sqlite_column!("category", &SqlType::Text, non_null = true),
        sqlite_column!("description", &SqlType::Text, non_null = true),
        sqlite_column!("image", &SqlType::Text, non_null = true),
        sqlite_column!("rating", &SqlType::Real, non_null = true),
        sqlite_column!(
            "created",
            &SqlType::Integer,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    indices: &[],
    unique_constraints: &[],
};

const ACTORS_TABLE: Table = Table {
    name: "actors",
    columns: &[
        sqlite_column!(
            "id",
            &SqlType::Integer,
            is_primary_key = true,
            is_autoincrement = true
        ),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!(
            "created",
            &SqlType::Integer,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    indices: &[],
    unique_constraints: &[],
};

/// Movie <-> Actor cast relation
const MOVIE_ACTORS_TABLE: Table = Table {
    name: "movie_actors",
    columns: &[
        sqlite_column!(
            "movie_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&ForeignKey {
                foreign_table: "movies",
                foreign_column: "id",
                on_delete: ForeignKeyOnChange::Cascade,
            })
        ),
        sqlite_column!(
            "actor_id",
            &SqlType::Integer,
            non_null = true,
            foreign_key = Some(&ForeignKey {
                foreign_table: "actors",
                foreign_column: "id",
                on_delete: ForeignKeyOnChange::Cascade,
            })
        ),
    ],
    indices: &[("idx_movie_actors_actor", "actor_id")],
    unique_constraints: &[&["movie_id", "actor_id"]],
};

pub const CATALOG_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[MOVIES_TABLE, ACTORS_TABLE, MOVIE_ACTORS_TABLE],
}];
