//! Catalog search and genre filtering.

use super::Book;

/// Filter applied to the catalog listing.
///
/// An empty `query` or missing `genre` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring of the title.
    pub query: String,
    /// Exact genre.
    pub genre: Option<String>,
}

impl BookFilter {
    /// Create a filter matching every book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to titles containing `query`, ignoring case.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to one genre. An empty string clears the restriction.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        let genre = genre.into();
        self.genre = if genre.is_empty() { None } else { Some(genre) };
        self
    }

    /// Check whether `book` passes this filter.
    pub fn matches(&self, book: &Book) -> bool {
        let title_ok = self.query.is_empty()
            || book
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        let genre_ok = self.genre.as_deref().is_none_or(|g| book.genre == g);
        title_ok && genre_ok
    }
}
