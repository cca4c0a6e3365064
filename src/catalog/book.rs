//! Catalog entries.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog book.
pub type BookId = u32;

/// A book in the read-only catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Book {
    /// Create a new book.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}
