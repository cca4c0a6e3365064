//! Application state facade.
//!
//! [`AppState`] composes the account registry, session manager, cart and
//! like registry over one [`KeyValueStore`](crate::store::KeyValueStore).
//! Presentation code either re-reads accessors after each call or
//! subscribes to [`StateChange`] notifications.

mod events;
mod facade;

pub use events::{StateChange, SubscriptionId};
pub use facade::AppState;
