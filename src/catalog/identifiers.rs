//! Parsing of the comma-separated identifier lists typed into cast forms.

use super::error::{CatalogError, CatalogResult};

pub const IDENTIFIER_SEPARATOR: char = ',';

/// Parses `"3, 7,12"` into `[3, 7, 12]`.
///
/// Segments are trimmed. Blank input yields an empty list. The first segment
/// that is not an integer (an empty one included) fails the whole parse.
pub fn parse_identifiers(text: &str) -> CatalogResult<Vec<i64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(IDENTIFIER_SEPARATOR)
        .map(|segment| {
            let segment = segment.trim();
            segment
                .parse::<i64>()
                .map_err(|_| CatalogError::MalformedIdentifier(segment.to_string()))
        })
        .collect()
}
