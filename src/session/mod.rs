//! Authenticated session.
//!
//! Two states: anonymous and authenticated. Login persists the session under
//! the `session` key so a restart restores it; logout removes the key and
//! empties the cart.

mod manager;

pub use manager::{Session, SessionManager, SessionState};
