//! Per-book like sets.

use std::collections::BTreeMap;

use crate::catalog::BookId;
use crate::error::Result;
use crate::session::Session;
use crate::store::{load_json, save_json, KeyValueStore, LIKES_KEY};

/// Result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The user now likes the book.
    Liked { count: usize },
    /// The user no longer likes the book.
    Unliked { count: usize },
    /// Nobody is logged in; nothing changed.
    Unauthenticated,
}

impl LikeOutcome {
    /// Like count after the toggle, if one happened.
    pub fn count(self) -> Option<usize> {
        match self {
            Self::Liked { count } | Self::Unliked { count } => Some(count),
            Self::Unauthenticated => None,
        }
    }

    /// User-facing prompt for a refused toggle.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Self::Unauthenticated => Some("Login to like a book"),
            _ => None,
        }
    }
}

/// Which users like which books.
///
/// Each email appears at most once per book. Likes belong to accounts, not
/// sessions, so they survive logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeRegistry {
    likes: BTreeMap<BookId, Vec<String>>,
}

impl LikeRegistry {
    /// Load the registry from storage, empty if nothing was stored.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut likes: BTreeMap<BookId, Vec<String>> =
            load_json(store, LIKES_KEY).unwrap_or_default();

        for emails in likes.values_mut() {
            let before = emails.len();
            let mut seen = Vec::with_capacity(before);
            emails.retain(|e| {
                if seen.contains(e) {
                    false
                } else {
                    seen.push(e.clone());
                    true
                }
            });
            if emails.len() != before {
                tracing::warn!("Dropped {} duplicate likes", before - emails.len());
            }
        }
        likes.retain(|_, emails| !emails.is_empty());

        tracing::debug!("Loaded likes for {} books", likes.len());
        Self { likes }
    }

    /// Flip the current user's like on `book_id` and persist the registry.
    pub fn toggle(
        &mut self,
        store: &mut dyn KeyValueStore,
        session: Option<&Session>,
        book_id: BookId,
    ) -> Result<LikeOutcome> {
        let Some(session) = session else {
            return Ok(LikeOutcome::Unauthenticated);
        };

        let mut likes = self.likes.clone();
        let emails = likes.entry(book_id).or_default();
        let liked = match emails.iter().position(|e| *e == session.email) {
            Some(index) => {
                emails.remove(index);
                false
            }
            None => {
                emails.push(session.email.clone());
                true
            }
        };
        let count = emails.len();
        if count == 0 {
            likes.remove(&book_id);
        }

        save_json(store, LIKES_KEY, &likes)?;
        self.likes = likes;

        tracing::debug!(
            "{} {} book {} ({} likes)",
            session.email,
            if liked { "liked" } else { "unliked" },
            book_id,
            count
        );

        Ok(if liked {
            LikeOutcome::Liked { count }
        } else {
            LikeOutcome::Unliked { count }
        })
    }

    /// Whether the current user likes `book_id`. False with no session.
    pub fn has_liked(&self, session: Option<&Session>, book_id: BookId) -> bool {
        let Some(session) = session else {
            return false;
        };
        self.likes
            .get(&book_id)
            .is_some_and(|emails| emails.contains(&session.email))
    }

    /// Number of users liking `book_id`.
    pub fn count(&self, book_id: BookId) -> usize {
        self.likes.get(&book_id).map_or(0, Vec::len)
    }

    /// Books liked by `email`, in id order.
    pub fn liked_by(&self, email: &str) -> Vec<BookId> {
        self.likes
            .iter()
            .filter(|(_, emails)| emails.iter().any(|e| e == email))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Emails liking `book_id`.
    pub fn likers(&self, book_id: BookId) -> &[String] {
        self.likes
            .get(&book_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
