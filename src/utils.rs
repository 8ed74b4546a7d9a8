//! Utility functions for string processing.

/// Split a query into lowercase terms on any whitespace.
///
/// Empty and whitespace-only queries produce no terms.
///
/// - "Water  LEAK" → ["water", "leak"]
/// - "   " → []
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercase every value of a tag list.
pub fn lowercase_all<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values.into_iter().map(str::to_lowercase).collect()
}
