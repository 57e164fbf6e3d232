//! Error types for nexus-core
//!
//! Everything that can go wrong while talking to the wallet library or to
//! the browser's persisted storage surfaces as a [`SessionError`].

use thiserror::Error;

/// Errors raised by the identity and storage seams
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Persisted session data could not be decoded
    #[error("Session decode error: {0}")]
    Decode(String),

    /// Browser storage was unavailable or refused the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// A redirect-based sign-in failed to resolve
    #[error("Pending sign-in failed: {0}")]
    PendingSignIn(String),

    /// The interactive connect flow could not be started
    #[error("Connect flow failed: {0}")]
    Connect(String),

    /// Signing out through the wallet library failed
    #[error("Sign-out failed: {0}")]
    SignOut(String),

    /// The JavaScript bridge to the wallet library raised an exception
    #[error("Wallet bridge error: {0}")]
    Bridge(String),
}

impl SessionError {
    /// Create a new Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a new Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a new PendingSignIn error
    pub fn pending(message: impl Into<String>) -> Self {
        Self::PendingSignIn(message.into())
    }

    /// Create a new Bridge error
    pub fn bridge(message: impl Into<String>) -> Self {
        Self::Bridge(message.into())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Decode(err.to_string())
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while loading the site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON for [`crate::SiteConfig`]
    #[error("Invalid site config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field held a value outside its allowed range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
