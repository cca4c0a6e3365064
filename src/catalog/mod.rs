//! The read-only book catalog.
//!
//! The catalog is an input supplied at startup. State operations only ever
//! read books from it; nothing here is persisted or mutated.
//!
//! # Example
//!
//! ```
//! use bookshelf::catalog::{BookFilter, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let classics = catalog.filter(&BookFilter::new().with_genre("Classic"));
//! assert_eq!(classics.len(), 3);
//! ```

mod book;
mod search;

pub use book::{Book, BookId};
pub use search::BookFilter;

use std::fs;
use std::path::Path;

use crate::error::{Result, ShelfError};

/// An ordered, fixed list of books.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a catalog from a list of books.
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The demo catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(vec![
            Book::new(1, "1984", "George Orwell", "Dystopian"),
            Book::new(2, "To Kill a Mockingbird", "Harper Lee", "Classic"),
            Book::new(3, "The Hobbit", "J.R.R. Tolkien", "Fantasy"),
            Book::new(4, "Sapiens", "Yuval Noah Harari", "Non-fiction"),
            Book::new(5, "The Great Gatsby", "F. Scott Fitzgerald", "Classic"),
            Book::new(6, "The Catcher in the Rye", "J.D. Salinger", "Classic"),
        ])
    }

    /// Load a catalog from a YAML or JSON list of books.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let books: Vec<Book> =
            serde_yaml::from_str(&content).map_err(|e| ShelfError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!("Loaded {} books from {:?}", books.len(), path);
        Ok(Self::new(books))
    }

    /// All books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Look up a book by id.
    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Look up a book by id, failing with `UnknownBook`.
    pub fn get(&self, id: BookId) -> Result<&Book> {
        self.find(id).ok_or(ShelfError::UnknownBook { id })
    }

    /// Distinct genres in order of first appearance.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for book in &self.books {
            if !genres.contains(&book.genre.as_str()) {
                genres.push(&book.genre);
            }
        }
        genres
    }

    /// Books passing `filter`, in catalog order.
    pub fn filter(&self, filter: &BookFilter) -> Vec<&Book> {
        self.books.iter().filter(|b| filter.matches(b)).collect()
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
