//! Account registration.
//!
//! Accounts are created by registration and never changed or removed. The
//! whole set is rewritten under the `accounts` key on every registration.

mod registry;

pub use registry::{Account, AccountRegistry};

pub(crate) use registry::require;
