use super::auth::CatalogHasher;
use super::user_models::{RegistrationError, User, UserRole};
use super::user_store::UserStore;
use crate::sqlite_column;
use crate::sqlite_persistence::{open_versioned, SqlType, Table, VersionedSchema, DEFAULT_TIMESTAMP};
use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

/// V 0
const USER_TABLE_V_0: Table = Table {
    name: "user",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("username", &SqlType::Text, non_null = true, is_unique = true),
        sqlite_column!("password_hash", &SqlType::Text, non_null = true),
        sqlite_column!("hasher", &SqlType::Text, non_null = true),
        sqlite_column!("enabled", &SqlType::Integer, non_null = true),
        sqlite_column!("role", &SqlType::Text, non_null = true),
        sqlite_column!(
            "created",
            &SqlType::Integer,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    unique_constraints: &[],
    indices: &[],
};

pub const USER_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[USER_TABLE_V_0],
}];

#[derive(Clone)]
pub struct SqliteUserStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteUserStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = open_versioned(db_path.as_ref(), USER_VERSIONED_SCHEMAS)
            .context("Failed to open user database")?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM user", [], |r| r.get(0))?;
        info!("Opened user db: {} users", count);

        Ok(SqliteUserStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("User connection mutex poisoned"))
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl UserStore for SqliteUserStore {
    fn register_user(&self, user: &User) -> Result<usize, RegistrationError> {
        let conn = self.lock()?;
        let inserted = conn.execute(
            "INSERT INTO user (username, password_hash, hasher, enabled, role)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &user.username,
                &user.password_hash,
                user.hasher.to_string(),
                user.enabled,
                user.role.as_str()
            ],
        );

        match inserted {
            Ok(_) => Ok(conn.last_insert_rowid() as usize),
            Err(err) if is_unique_violation(&err) => {
                Err(RegistrationError::Conflict(user.username.clone()))
            }
            Err(err) => Err(anyhow::Error::from(err)
                .context(format!("Failed to register user {}", user.username))
                .into()),
        }
    }

    fn get_user(&self, username: &str) -> Result<Option<User>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT username, password_hash, hasher, enabled, role FROM user
                 WHERE username = ?1",
                params![username],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, bool>(3)?,
                        row.get::<_, String>(4)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((username, password_hash, hasher, enabled, role)) => {
                let hasher = hasher
                    .parse::<CatalogHasher>()
                    .with_context(|| format!("Bad hasher for user {}", username))?;
                let role = UserRole::from_str(&role)
                    .with_context(|| format!("Unknown role {} for user {}", role, username))?;
                Ok(Some(User {
                    username,
                    password_hash,
                    hasher,
                    enabled,
                    role,
                }))
            }
            None => Ok(None),
        }
    }

    fn get_users_count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM user", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}
