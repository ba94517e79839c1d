//! Session status discovered when the login page mounts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserIdentity;

/// The two modes the login page can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginView {
    /// A session already exists; the form is suppressed.
    AlreadyAuthenticated,
    /// Interactive login form.
    LoginForm,
}

/// Result of the mount-time session probe.
///
/// Starts empty so the page renders the form until the probe resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStatus {
    pub user: Option<UserIdentity>,
}

impl SessionStatus {
    pub fn view(&self) -> LoginView {
        if self.user.is_some() {
            LoginView::AlreadyAuthenticated
        } else {
            LoginView::LoginForm
        }
    }
}
