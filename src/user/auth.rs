//! Password hashing

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

mod catalog_argon2 {
    use anyhow::{anyhow, Result};
    use argon2::{
        password_hash::{
            rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        },
        Argon2,
    };

    pub fn hash(plain: &[u8]) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash_string = Argon2::default()
            .hash_password(plain, &salt)
            .map_err(|err| anyhow!("{}", err))?
            .to_string();
        Ok(hash_string)
    }

    pub fn verify(plain_pw: &[u8], target_hash: &str) -> Result<bool> {
        let password_hash = PasswordHash::new(target_hash).map_err(|err| anyhow!("{}", err))?;
        Ok(Argon2::default()
            .verify_password(plain_pw, &password_hash)
            .is_ok())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogHasher {
    #[default]
    Argon2,
}

impl FromStr for CatalogHasher {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "argon2" => Ok(CatalogHasher::Argon2),
            _ => bail!("Unknown hasher {}", s),
        }
    }
}

impl fmt::Display for CatalogHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogHasher::Argon2 => write!(f, "argon2"),
        }
    }
}

impl CatalogHasher {
    /// Hashes `plain` with a freshly generated salt. The salt is embedded in
    /// the returned PHC string.
    pub fn hash<T: AsRef<str>>(&self, plain: T) -> Result<String> {
        match self {
            CatalogHasher::Argon2 => catalog_argon2::hash(plain.as_ref().as_bytes()),
        }
    }

    pub fn verify(&self, plain_pw: &str, target_hash: &str) -> Result<bool> {
        match self {
            CatalogHasher::Argon2 => catalog_argon2::verify(plain_pw.as_bytes(), target_hash),
        }
    }
}
