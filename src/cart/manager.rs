//! The session-scoped shopping cart.

use chrono::Utc;

use super::{CartItem, Receipt};
use crate::catalog::{Book, BookId};
use crate::session::Session;

/// Result of an add-to-cart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The book was appended to the cart.
    Added,
    /// The book was already in the cart; nothing changed.
    AlreadyInCart,
    /// Nobody is logged in; nothing changed.
    Unauthenticated,
}

impl CartOutcome {
    /// Whether the cart changed.
    pub fn changed(self) -> bool {
        matches!(self, Self::Added)
    }

    /// User-facing prompt for a refused request.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Self::Unauthenticated => Some("Login to add to cart"),
            _ => None,
        }
    }
}

/// Books queued for purchase, unique by id, in insertion order.
///
/// The cart lives only in memory and is empty whenever no one is logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `book` for the current session.
    pub fn add(&mut self, session: Option<&Session>, book: &Book) -> CartOutcome {
        if session.is_none() {
            return CartOutcome::Unauthenticated;
        }

        if self.contains(book.id) {
            return CartOutcome::AlreadyInCart;
        }

        self.items.push(CartItem::from(book));
        tracing::debug!("Added book {} to cart ({} items)", book.id, self.items.len());
        CartOutcome::Added
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Take every item out of the cart.
    ///
    /// Returns `None` when the cart is already empty.
    pub fn checkout(&mut self) -> Option<Receipt> {
        if self.items.is_empty() {
            return None;
        }

        let items = std::mem::take(&mut self.items);
        tracing::debug!("Checked out {} items", items.len());
        Some(Receipt {
            items,
            completed_at: Utc::now(),
        })
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Check if a book is in the cart.
    pub fn contains(&self, id: BookId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
