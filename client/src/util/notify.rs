//! User-facing notification capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow reports outcomes through [`NotificationSink`] only; the
//! toast queue in `state::toast` is the browser implementation.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    /// Rendered with the destructive style.
    Error,
}

/// Optional action button offered alongside a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryAction {
    pub label: String,
    /// Accessible description of the action.
    pub alt_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub retry: Option<RetryAction>,
}

impl Notification {
    pub fn login_success() -> Self {
        Self {
            severity: Severity::Info,
            title: "Login success".to_owned(),
            description: "Please do not abuse the system!".to_owned(),
            retry: None,
        }
    }

    /// Shown for any provider failure. The provider's own reason is never echoed.
    pub fn invalid_credentials() -> Self {
        Self {
            severity: Severity::Error,
            title: "Invalid username or password".to_owned(),
            description: "Please check your credentials and try again".to_owned(),
            retry: None,
        }
    }

    /// Shown when a submit is rejected before the provider is called.
    pub fn request_failed() -> Self {
        Self {
            severity: Severity::Error,
            title: "Uh oh! Something went wrong.".to_owned(),
            description: "There was a problem with your request.".to_owned(),
            retry: Some(RetryAction { label: "Try again".to_owned(), alt_text: "Try again".to_owned() }),
        }
    }
}

/// Surfaces transient messages to the user.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}
