//! Login state.

use serde::{Deserialize, Serialize};

use crate::account::{require, AccountRegistry};
use crate::cart::Cart;
use crate::error::{Result, ShelfError};
use crate::store::{load_json, save_json, KeyValueStore, SESSION_KEY};

/// The authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Session {
    /// Create a session for `email`.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Where the session state machine currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Nobody is logged in.
    Anonymous,
    /// Logged in as the given email.
    Authenticated(String),
}

/// Owns the single active session, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionManager {
    current: Option<Session>,
}

impl SessionManager {
    /// Restore the persisted session, anonymous if none was stored.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let current: Option<Session> = load_json(store, SESSION_KEY);
        if let Some(session) = &current {
            tracing::debug!("Restored session for {}", session.email);
        }
        Self { current }
    }

    /// Log in with credentials checked against `registry`.
    ///
    /// # Errors
    ///
    /// - `MissingField` for an empty email or password
    /// - `AlreadyAuthenticated` if a session is already active
    /// - `InvalidCredentials` if no account matches
    pub fn login(
        &mut self,
        store: &mut dyn KeyValueStore,
        registry: &AccountRegistry,
        email: &str,
        password: &str,
    ) -> Result<&Session> {
        require("email", email)?;
        require("password", password)?;

        if let Some(active) = &self.current {
            return Err(ShelfError::AlreadyAuthenticated {
                email: active.email.clone(),
            });
        }

        let account = registry
            .find_match(email, password)
            .ok_or(ShelfError::InvalidCredentials)?;

        let session = Session::new(account.email.clone());
        save_json(store, SESSION_KEY, &session)?;
        tracing::info!("Logged in as {}", session.email);

        Ok(self.current.insert(session))
    }

    /// Log out and empty the cart.
    ///
    /// Returns whether a session was actually ended. Logging out while
    /// anonymous is a no-op.
    pub fn logout(&mut self, store: &mut dyn KeyValueStore, cart: &mut Cart) -> Result<bool> {
        cart.clear();

        let Some(session) = self.current.as_ref() else {
            return Ok(false);
        };

        store.remove(SESSION_KEY)?;
        tracing::info!("Logged out {}", session.email);
        self.current = None;
        Ok(true)
    }

    /// The active session.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Email of the logged-in user.
    pub fn email(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.email.as_str())
    }

    /// Current state machine position.
    pub fn state(&self) -> SessionState {
        match &self.current {
            Some(session) => SessionState::Authenticated(session.email.clone()),
            None => SessionState::Anonymous,
        }
    }

    /// Check if someone is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
