use crate::catalog_store::Movie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Highest rating first.
    Rating,
    /// Ascending, case-sensitive.
    Name,
    /// Most recent release first.
    Date,
}

impl SortKey {
    /// Returns None for anything that is not a known key.
    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "rating" => Some(SortKey::Rating),
            "name" => Some(SortKey::Name),
            "date" => Some(SortKey::Date),
            _ => None,
        }
    }
}

/// Stable sort: movies that compare equal keep their relative order.
pub fn sort_movies(movies: &mut [Movie], key: SortKey) {
    match key {
        SortKey::Rating => movies.sort_by(|a, b| b.fields.rating.total_cmp(&a.fields.rating)),
        SortKey::Name => movies.sort_by(|a, b| a.fields.name.cmp(&b.fields.name)),
        SortKey::Date => {
            movies.sort_by(|a, b| b.fields.release_date.cmp(&a.fields.release_date))
        }
    }
}
