//! Cart entries and checkout receipts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Book, BookId};

/// A book queued for purchase, with display fields captured at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl From<&Book> for CartItem {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
        }
    }
}

/// What a completed checkout took out of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Purchased items in the order they were added.
    pub items: Vec<CartItem>,
    /// When the checkout happened.
    pub completed_at: DateTime<Utc>,
}

impl Receipt {
    /// Number of purchased items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the receipt lists nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
