//! Contract for the external identity/session provider.
//!
//! The host application signs users up, logs them in, and keeps sessions
//! fresh through this trait; the game engine never touches any of it.
//! Records are opaque to the caller: tokens plus an expiry, an id plus an
//! email. No HTTP client ships here — the host wires in whichever
//! provider it talks to, and tests use an in-memory fake.

use serde::{Deserialize, Serialize};

/// An authenticated session as the provider returns it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for authenticated calls.
    pub access_token: String,
    /// Token exchanged for a fresh session near expiry.
    pub refresh_token: String,
    /// Unix timestamp (seconds) the access token expires at.
    pub expires_at: u64,
}

/// The provider's user record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned opaque id.
    pub id: String,
    pub email: String,
}

/// Errors surfaced by the identity provider
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account already exists for this email")]
    EmailTaken,
    #[error("session expired, log in again")]
    SessionExpired,
    /// Anything else the provider reports, passed through verbatim.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Operations the host application relies on
pub trait IdentityProvider {
    /// Registers a new account.
    fn sign_up(&mut self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Authenticates and opens a session.
    fn log_in(&mut self, email: &str, password: &str) -> Result<(Session, User), AuthError>;

    /// Closes the current session.
    fn log_out(&mut self) -> Result<(), AuthError>;

    /// Starts a password-reset flow for the given email.
    fn request_password_reset(&mut self, email: &str) -> Result<(), AuthError>;

    /// Replaces the password of the logged-in account.
    fn update_password(&mut self, new_password: &str) -> Result<(), AuthError>;

    /// Exchanges tokens for a fresh session.
    fn refresh_session(
        &mut self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<Session, AuthError>;
}
