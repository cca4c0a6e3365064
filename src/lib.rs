//! Bookshelf - Client state for a small book catalog.
//!
//! Bookshelf keeps the state behind a book catalog: registered accounts, the
//! logged-in session, a shopping cart and per-book likes. Accounts, session
//! and likes persist across restarts through a key-value store; the cart
//! lives only as long as the process.
//!
//! # Modules
//!
//! - [`account`] - Registered accounts
//! - [`cart`] - Shopping cart and checkout receipts
//! - [`catalog`] - Books, genres and search filters
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and path resolution
//! - [`error`] - Error types and result aliases
//! - [`likes`] - Per-book likes
//! - [`session`] - The logged-in identity
//! - [`state`] - The facade tying everything together, with change events
//! - [`store`] - Durable key-value storage
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use bookshelf::catalog::Catalog;
//! use bookshelf::state::AppState;
//! use bookshelf::store::MemoryStore;
//!
//! let catalog = Catalog::builtin();
//! let mut state = AppState::load(MemoryStore::new());
//!
//! state.register("reader@example.com", "pw").unwrap();
//! state.login("reader@example.com", "pw").unwrap();
//! state.toggle_like(1).unwrap();
//! state.add_to_cart(catalog.find(1).unwrap());
//!
//! // Likes survive a reload, the cart does not.
//! let state = AppState::load(state.into_store());
//! assert_eq!(state.like_count(1), 1);
//! assert!(state.cart().is_empty());
//! ```
//!
//! For file-backed storage, see the integration tests.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod likes;
pub mod session;
pub mod state;
pub mod store;
pub mod ui;

pub use error::{Result, ShelfError};
