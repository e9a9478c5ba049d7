/// Trait for data types that support free-text search
pub trait Searchable {
    /// Check whether the object matches the search query.
    ///
    /// Matching is case-insensitive; an empty query matches everything.
    fn matches_filter(&self, filter: &str) -> bool;
}
