//! Registered accounts and credential matching.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};
use crate::store::{load_json, save_json, KeyValueStore, ACCOUNTS_KEY};

/// A registered account.
///
/// Stored exactly as entered; the password is kept and compared in plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub password: String,
}

impl Account {
    /// Create a new account.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The set of registered accounts, keyed by exact email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Load the registry from storage, empty if nothing was stored.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let accounts: Vec<Account> = load_json(store, ACCOUNTS_KEY).unwrap_or_default();
        tracing::debug!("Loaded {} accounts", accounts.len());
        Self { accounts }
    }

    /// Register a new account and persist the full set.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for an empty email or password and
    /// `DuplicateAccount` if the email is already registered.
    pub fn register(
        &mut self,
        store: &mut dyn KeyValueStore,
        email: &str,
        password: &str,
    ) -> Result<()> {
        require("email", email)?;
        require("password", password)?;

        if self.contains(email) {
            return Err(ShelfError::DuplicateAccount {
                email: email.to_string(),
            });
        }

        let mut accounts = self.accounts.clone();
        accounts.push(Account::new(email, password));
        save_json(store, ACCOUNTS_KEY, &accounts)?;
        self.accounts = accounts;

        tracing::info!("Registered account {}", email);
        Ok(())
    }

    /// Find the account matching both email and password exactly.
    pub(crate) fn find_match(&self, email: &str, password: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
    }

    /// Check if an account with this exact email exists.
    pub fn contains(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.email == email)
    }

    /// All accounts in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if no account is registered.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Reject an empty input.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ShelfError::MissingField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn load_empty_store() {
        let store = MemoryStore::new();
        let registry = AccountRegistry::load(&store);
        assert!(registry.is_empty());
    }

    #[test]
    fn register_adds_and_persists() {
        let mut store = MemoryStore::new();
        let mut registry = AccountRegistry::load(&store);

        registry.register(&mut store, "a@x.com", "p1").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            store.get(ACCOUNTS_KEY),
            Some(json!([{"email": "a@x.com", "password": "p1"}]))
        );
    }

    #[test]
    fn register_duplicate_fails() {
        let mut store = MemoryStore::new();
        let mut registry = AccountRegistry::load(&store);
        registry.register(&mut store, "a@x.com", "p1").unwrap();

        let err = registry.register(&mut store, "a@x.com", "other").unwrap_err();

        assert!(matches!(err, ShelfError::DuplicateAccount { ref email } if email == "a@x.com"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let mut store = MemoryStore::new();
        let mut registry = AccountRegistry::load(&store);
        registry.register(&mut store, "a@x.com", "p1").unwrap();

        registry.register(&mut store, "A@x.com", "p1").unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.find_match("A@X.COM", "p1").is_none());
    }

    #[test]
    fn register_requires_email_and_password() {
        let mut store = MemoryStore::new();
        let mut registry = AccountRegistry::load(&store);

        let err = registry.register(&mut store, "", "p1").unwrap_err();
        assert!(matches!(err, ShelfError::MissingField { field: "email" }));

        let err = registry.register(&mut store, "a@x.com", "").unwrap_err();
        assert!(matches!(err, ShelfError::MissingField { field: "password" }));

        assert!(store.is_empty());
    }

    #[test]
    fn find_match_needs_both_fields() {
        let mut store = MemoryStore::new();
        let mut registry = AccountRegistry::load(&store);
        registry.register(&mut store, "a@x.com", "p1").unwrap();

        assert!(registry.find_match("a@x.com", "p1").is_some());
        assert!(registry.find_match("a@x.com", "p2").is_none());
        assert!(registry.find_match("b@x.com", "p1").is_none());
    }

    #[test]
    fn load_restores_persisted_accounts() {
        let mut store = MemoryStore::new();
        let mut registry = AccountRegistry::load(&store);
        registry.register(&mut store, "a@x.com", "p1").unwrap();
        registry.register(&mut store, "b@x.com", "p2").unwrap();

        let reloaded = AccountRegistry::load(&store);
        assert_eq!(reloaded, registry);
    }

    #[test]
    fn load_malformed_accounts_is_empty() {
        let mut store = MemoryStore::new();
        store.insert_raw(ACCOUNTS_KEY, "[{\"email\":");

        let registry = AccountRegistry::load(&store);
        assert!(registry.is_empty());
    }
}
