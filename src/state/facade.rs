//! The composed application state.

use super::events::{StateChange, SubscriptionId, Subscribers};
use crate::account::AccountRegistry;
use crate::cart::{Cart, CartItem, CartOutcome, Receipt};
use crate::catalog::{Book, BookId};
use crate::error::Result;
use crate::likes::{LikeOutcome, LikeRegistry};
use crate::session::{Session, SessionManager, SessionState};
use crate::store::KeyValueStore;

/// Accounts, session, cart and likes behind one handle.
///
/// All persisted state is read from `store` once, in [`AppState::load`].
/// Every mutating call writes through to the store before it returns, and
/// is visible to the very next read.
///
/// # Example
///
/// ```
/// use bookshelf::catalog::Catalog;
/// use bookshelf::state::AppState;
/// use bookshelf::store::MemoryStore;
///
/// let catalog = Catalog::builtin();
/// let mut state = AppState::load(MemoryStore::new());
///
/// state.register("a@x.com", "p1").unwrap();
/// state.login("a@x.com", "p1").unwrap();
/// state.add_to_cart(catalog.find(3).unwrap());
/// state.toggle_like(3).unwrap();
///
/// assert!(state.has_liked(3));
/// assert_eq!(state.like_count(3), 1);
///
/// state.logout().unwrap();
/// assert!(state.cart().is_empty());
/// assert_eq!(state.like_count(3), 1);
/// ```
#[derive(Debug)]
pub struct AppState<S: KeyValueStore> {
    store: S,
    accounts: AccountRegistry,
    sessions: SessionManager,
    cart: Cart,
    likes: LikeRegistry,
    subscribers: Subscribers,
}

impl<S: KeyValueStore> AppState<S> {
    /// Build the state from whatever `store` holds.
    pub fn load(store: S) -> Self {
        let accounts = AccountRegistry::load(&store);
        let sessions = SessionManager::load(&store);
        let likes = LikeRegistry::load(&store);

        Self {
            store,
            accounts,
            sessions,
            cart: Cart::new(),
            likes,
            subscribers: Subscribers::default(),
        }
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new account. Does not log in.
    pub fn register(&mut self, email: &str, password: &str) -> Result<()> {
        self.accounts.register(&mut self.store, email, password)?;
        self.subscribers.emit(&StateChange::AccountRegistered {
            email: email.to_string(),
        });
        Ok(())
    }

    /// Start a session for a registered account.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Session> {
        let session = self
            .sessions
            .login(&mut self.store, &self.accounts, email, password)?;
        self.subscribers.emit(&StateChange::LoggedIn {
            email: session.email.clone(),
        });
        Ok(session)
    }

    /// End the session and empty the cart. Harmless when anonymous.
    pub fn logout(&mut self) -> Result<()> {
        if self.sessions.logout(&mut self.store, &mut self.cart)? {
            self.subscribers.emit(&StateChange::LoggedOut);
        }
        Ok(())
    }

    /// Add a catalog book to the cart.
    pub fn add_to_cart(&mut self, book: &Book) -> CartOutcome {
        let outcome = self.cart.add(self.sessions.current(), book);
        if outcome.changed() {
            self.subscribers.emit(&StateChange::CartChanged {
                len: self.cart.len(),
            });
        }
        outcome
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        let was_empty = self.cart.is_empty();
        self.cart.clear();
        if !was_empty {
            self.subscribers.emit(&StateChange::CartChanged { len: 0 });
        }
    }

    /// Complete the purchase of everything in the cart.
    pub fn checkout(&mut self) -> Option<Receipt> {
        let receipt = self.cart.checkout()?;
        self.subscribers.emit(&StateChange::CartChanged { len: 0 });
        Some(receipt)
    }

    /// Flip the current user's like on a book.
    pub fn toggle_like(&mut self, book_id: BookId) -> Result<LikeOutcome> {
        let outcome = self
            .likes
            .toggle(&mut self.store, self.sessions.current(), book_id)?;

        match outcome {
            LikeOutcome::Liked { count } | LikeOutcome::Unliked { count } => {
                self.subscribers.emit(&StateChange::LikeToggled {
                    book_id,
                    liked: matches!(outcome, LikeOutcome::Liked { .. }),
                    count,
                });
            }
            LikeOutcome::Unauthenticated => {}
        }
        Ok(outcome)
    }

    /// Whether the current user likes a book.
    pub fn has_liked(&self, book_id: BookId) -> bool {
        self.likes.has_liked(self.sessions.current(), book_id)
    }

    /// How many users like a book.
    pub fn like_count(&self, book_id: BookId) -> usize {
        self.likes.count(book_id)
    }

    /// The active session.
    pub fn session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    /// Anonymous or authenticated.
    pub fn session_state(&self) -> SessionState {
        self.sessions.state()
    }

    /// Cart items in insertion order.
    pub fn cart(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Whether a book is in the cart.
    pub fn is_in_cart(&self, book_id: BookId) -> bool {
        self.cart.contains(book_id)
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Read view of the like registry.
    pub fn likes(&self) -> &LikeRegistry {
        &self.likes
    }

    /// Call `listener` after every successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(Box::new(listener))
    }

    /// Stop notifying a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::ShelfError;
    use crate::store::{MemoryStore, ACCOUNTS_KEY, LIKES_KEY, SESSION_KEY};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn logged_in() -> AppState<MemoryStore> {
        let mut state = AppState::load(MemoryStore::new());
        state.register("a@x.com", "p1").unwrap();
        state.login("a@x.com", "p1").unwrap();
        state
    }

    fn book(id: BookId) -> Book {
        Catalog::builtin().find(id).cloned().unwrap()
    }

    #[test]
    fn register_twice_fails_second_time() {
        let mut state = AppState::load(MemoryStore::new());

        state.register("a@x.com", "p1").unwrap();
        assert_eq!(state.account_count(), 1);

        let err = state.register("a@x.com", "p1").unwrap_err();
        assert!(matches!(err, ShelfError::DuplicateAccount { .. }));
        assert_eq!(state.account_count(), 1);
    }

    #[test]
    fn register_does_not_log_in() {
        let mut state = AppState::load(MemoryStore::new());
        state.register("a@x.com", "p1").unwrap();

        assert_eq!(state.session_state(), SessionState::Anonymous);
    }

    #[test]
    fn login_transitions_to_authenticated() {
        let state = logged_in();
        assert_eq!(
            state.session_state(),
            SessionState::Authenticated("a@x.com".into())
        );
        assert_eq!(state.session().unwrap().email, "a@x.com");
    }

    #[test]
    fn wrong_password_leaves_anonymous() {
        let mut state = AppState::load(MemoryStore::new());
        state.register("a@x.com", "p1").unwrap();

        let err = state.login("a@x.com", "p2").unwrap_err();

        assert!(matches!(err, ShelfError::InvalidCredentials));
        assert!(state.session().is_none());
    }

    #[test]
    fn add_to_cart_is_idempotent() {
        let mut state = logged_in();

        state.add_to_cart(&book(3));
        state.add_to_cart(&book(3));

        assert_eq!(state.cart().len(), 1);
        assert!(state.is_in_cart(3));
    }

    #[test]
    fn add_to_cart_anonymous_is_refused() {
        let mut state = AppState::load(MemoryStore::new());

        let outcome = state.add_to_cart(&book(3));

        assert_eq!(outcome, CartOutcome::Unauthenticated);
        assert!(state.cart().is_empty());
    }

    #[test]
    fn toggle_like_anonymous_is_refused() {
        let mut state = AppState::load(MemoryStore::new());

        let outcome = state.toggle_like(3).unwrap();

        assert_eq!(outcome, LikeOutcome::Unauthenticated);
        assert_eq!(state.like_count(3), 0);
        assert!(!state.has_liked(3));
    }

    #[test]
    fn logout_keeps_likes_and_accounts() {
        let mut state = logged_in();
        state.add_to_cart(&book(3));
        state.toggle_like(3).unwrap();

        state.logout().unwrap();

        assert!(state.session().is_none());
        assert!(state.cart().is_empty());
        assert!(!state.has_liked(3));
        assert_eq!(state.like_count(3), 1);
        assert_eq!(state.account_count(), 1);
    }

    #[test]
    fn checkout_empties_cart() {
        let mut state = logged_in();
        state.add_to_cart(&book(1));
        state.add_to_cart(&book(2));

        let receipt = state.checkout().unwrap();

        assert_eq!(receipt.len(), 2);
        assert!(state.cart().is_empty());
        assert!(state.checkout().is_none());
    }

    #[test]
    fn reload_reproduces_persisted_state() {
        let mut state = logged_in();
        state.add_to_cart(&book(3));
        state.toggle_like(3).unwrap();
        let accounts = state.accounts.clone();
        let likes = state.likes().clone();

        let reloaded = AppState::load(state.into_store());

        assert_eq!(reloaded.accounts, accounts);
        assert_eq!(reloaded.likes(), &likes);
        assert_eq!(reloaded.session().unwrap().email, "a@x.com");
        assert!(reloaded.cart().is_empty());
    }

    #[test]
    fn cart_is_never_persisted() {
        let mut state = logged_in();
        state.add_to_cart(&book(3));

        let store = state.into_store();
        assert_eq!(store.len(), 2);
        assert!(store.contains_key(ACCOUNTS_KEY));
        assert!(store.contains_key(SESSION_KEY));
        assert!(!store.contains_key(LIKES_KEY));
    }

    #[test]
    fn subscribers_see_each_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = AppState::load(MemoryStore::new());
        let sink = Rc::clone(&seen);
        state.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        state.register("a@x.com", "p1").unwrap();
        state.login("a@x.com", "p1").unwrap();
        state.add_to_cart(&book(3));
        state.add_to_cart(&book(3));
        state.toggle_like(3).unwrap();
        state.logout().unwrap();
        state.logout().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                StateChange::AccountRegistered {
                    email: "a@x.com".into()
                },
                StateChange::LoggedIn {
                    email: "a@x.com".into()
                },
                StateChange::CartChanged { len: 1 },
                StateChange::LikeToggled {
                    book_id: 3,
                    liked: true,
                    count: 1
                },
                StateChange::LoggedOut,
            ]
        );
    }

    #[test]
    fn failed_operations_emit_nothing() {
        let seen = Rc::new(RefCell::new(0));
        let mut state = AppState::load(MemoryStore::new());
        let counter = Rc::clone(&seen);
        state.subscribe(move |_| *counter.borrow_mut() += 1);

        let _ = state.login("nobody@x.com", "p1");
        state.add_to_cart(&book(3));
        state.toggle_like(3).unwrap();
        state.clear_cart();

        assert_eq!(*seen.borrow(), 0);
    }
}
