//! Error types for bookshelf operations.
//!
//! This module defines [`ShelfError`], the error type returned by every
//! fallible state operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Rejected user actions (duplicate account, bad credentials) are errors the
//!   caller shows and the user retries
//! - Missing sessions are *not* errors: cart and like operations report them
//!   as `Unauthenticated` outcomes
//! - Storage read problems never surface; only failed writes do

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::BookId;

/// Core error type for bookshelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// An account with this exact email is already registered.
    #[error("User already exists: {email}")]
    DuplicateAccount { email: String },

    /// No registered account matches the email and password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login attempted while a session is already active.
    #[error("Already logged in as {email}; log out first")]
    AlreadyAuthenticated { email: String },

    /// A required input was empty.
    #[error("Missing {field}")]
    MissingField { field: &'static str },

    /// The catalog has no book with this id.
    #[error("Unknown book: {id}")]
    UnknownBook { id: BookId },

    /// Writing to durable storage failed.
    #[error("Failed to persist '{key}': {message}")]
    Storage { key: String, message: String },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or catalog file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShelfError {
    /// Whether the user can fix this by changing their input and retrying.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAccount { .. }
                | Self::InvalidCredentials
                | Self::AlreadyAuthenticated { .. }
                | Self::MissingField { .. }
                | Self::UnknownBook { .. }
        )
    }
}

/// Result type alias for bookshelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_account_displays_email() {
        let err = ShelfError::DuplicateAccount {
            email: "a@x.com".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("already exists"));
        assert!(msg.contains("a@x.com"));
    }

    #[test]
    fn invalid_credentials_message() {
        assert_eq!(
            ShelfError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn missing_field_names_field() {
        let err = ShelfError::MissingField { field: "password" };
        assert_eq!(err.to_string(), "Missing password");
    }

    #[test]
    fn storage_error_displays_key_and_message() {
        let err = ShelfError::Storage {
            key: "likes".into(),
            message: "disk full".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("likes"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ShelfError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn user_errors_are_classified() {
        assert!(ShelfError::InvalidCredentials.is_user_error());
        assert!(ShelfError::UnknownBook { id: 9 }.is_user_error());
        assert!(!ShelfError::Storage {
            key: "accounts".into(),
            message: "x".into()
        }
        .is_user_error());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ShelfError = io_err.into();
        assert!(matches!(err, ShelfError::Io(_)));
    }
}
