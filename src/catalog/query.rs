//! Single-criterion movie filters.
//!
//! Name and actor filters are case-insensitive substring matches, the
//! category filter is a case-insensitive exact match.

use crate::catalog_store::{Actor, ActorId, Movie};
use serde::Deserialize;
use std::collections::HashMap;

/// The one filter honored by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MovieFilter {
    Name(String),
    Category(String),
    Actor(String),
    All,
}

/// Raw search parameters, as submitted by the search form or query string.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub actor: Option<String>,
    pub order_by: Option<String>,
}

impl SearchRequest {
    /// Picks the filter to apply: name, then category, then actor.
    /// Presence decides, so `name=` selects the name filter, which matches
    /// every movie.
    pub fn filter(&self) -> MovieFilter {
        match (&self.name, &self.category, &self.actor) {
            (Some(name), _, _) => MovieFilter::Name(name.clone()),
            (None, Some(category), _) => MovieFilter::Category(category.clone()),
            (None, None, Some(actor)) => MovieFilter::Actor(actor.clone()),
            (None, None, None) => MovieFilter::All,
        }
    }
}

pub fn by_name(movies: Vec<Movie>, query: &str) -> Vec<Movie> {
    let query = query.to_lowercase();
    movies
        .into_iter()
        .filter(|m| m.name().to_lowercase().contains(&query))
        .collect()
}

pub fn by_category(movies: Vec<Movie>, query: &str) -> Vec<Movie> {
    let query = query.to_lowercase();
    movies
        .into_iter()
        .filter(|m| m.category().to_lowercase() == query)
        .collect()
}

/// Keeps the movies with at least one cast member whose name contains `query`.
pub fn by_actor(movies: Vec<Movie>, actors: &[Actor], query: &str) -> Vec<Movie> {
    let query = query.to_lowercase();
    let matching: HashMap<ActorId, bool> = actors
        .iter()
        .map(|a| (a.id, a.name.to_lowercase().contains(&query)))
        .collect();

    movies
        .into_iter()
        .filter(|m| {
            m.cast
                .iter()
                .any(|id| matching.get(id).copied().unwrap_or(false))
        })
        .collect()
}
