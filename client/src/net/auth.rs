//! Auth capability consumed by the login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credential verification, session issuance and token storage all live in
//! the managed auth provider. The login controller only sees this trait, so
//! tests substitute an in-memory double for [`super::supabase::SupabaseAuthClient`].

use super::types::{Session, UserIdentity};

/// Failures reported by an [`AuthClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider refused the credentials.
    #[error("auth rejected: {reason}")]
    Rejected { reason: String },

    /// The request never produced a usable provider answer.
    #[error("auth transport failed: {0}")]
    Transport(String),
}

/// Credential-based sign-in plus existing-session lookup.
///
/// Futures are `!Send`; everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    /// Return the user owning the current session, or `None` when signed out.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] when the provider cannot be reached.
    async fn get_current_user(&self) -> Result<Option<UserIdentity>, AuthError>;

    /// Exchange an email + password for a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] for bad credentials and
    /// [`AuthError::Transport`] for network or provider failures.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}
