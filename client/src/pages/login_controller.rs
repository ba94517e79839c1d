//! Orchestration behind the login page: session probe, form events, submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns the form and session signals and talks to three
//! injected collaborators: an [`AuthClient`], a [`NotificationSink`] and a
//! [`Navigator`]. `LoginPage` wires in the browser implementations; tests
//! wire in doubles.
//!
//! TEARDOWN
//! ========
//! Requests are never cancelled. The `alive` flag is cleared when the page
//! unmounts and every resolution checks it before touching state or emitting
//! side effects.

#[cfg(test)]
#[path = "login_controller_test.rs"]
mod login_controller_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::auth::AuthClient;
use crate::net::types::Session;
use crate::state::login::{Field, FormState, SubmitError};
use crate::state::session::SessionStatus;
use crate::util::navigate::{HOME_PATH, Navigator};
use crate::util::notify::{Notification, NotificationSink};

pub struct LoginController<A, N, R> {
    auth: A,
    notifier: N,
    navigator: R,
    form: RwSignal<FormState>,
    session: RwSignal<SessionStatus>,
    alive: Arc<AtomicBool>,
}

impl<A, N, R> LoginController<A, N, R>
where
    A: AuthClient,
    N: NotificationSink,
    R: Navigator,
{
    pub fn new(auth: A, notifier: N, navigator: R) -> Self {
        Self {
            auth,
            notifier,
            navigator,
            form: RwSignal::new(FormState::default()),
            session: RwSignal::new(SessionStatus::default()),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn form(&self) -> RwSignal<FormState> {
        self.form
    }

    pub fn session(&self) -> RwSignal<SessionStatus> {
        self.session
    }

    /// Shared flag for `on_cleanup`, which needs a `Send` handle.
    pub fn alive_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.alive)
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn input(&self, field: Field, value: String) {
        self.form.update(|form| form.input(field, value));
    }

    pub fn blur(&self, field: Field) {
        self.form.update(|form| form.blur(field));
    }

    /// Look up an existing session. Failures count as "signed out".
    pub async fn probe_session(&self) {
        let user = match self.auth.get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                leptos::logging::log!("session probe failed: {e}");
                None
            }
        };
        if !self.is_alive() {
            return;
        }
        self.session.set(SessionStatus { user });
    }

    /// Run one submit attempt end to end.
    ///
    /// # Errors
    ///
    /// See [`SubmitError`]. Every error leaves the form interactive.
    pub async fn submit(&self) -> Result<Session, SubmitError> {
        if !self.is_alive() {
            return Err(SubmitError::Unmounted);
        }
        let credentials = match self.form.try_update(FormState::begin_submit) {
            Some(Ok(credentials)) => credentials,
            Some(Err(err)) => {
                if let SubmitError::InvalidForm(errors) = &err {
                    leptos::logging::warn!("login submit rejected by schema: {errors:?}");
                    self.notifier.notify(Notification::request_failed());
                }
                return Err(err);
            }
            None => return Err(SubmitError::Unmounted),
        };

        let result = self.auth.sign_in(&credentials.email, &credentials.password).await;
        if !self.is_alive() {
            return Err(SubmitError::Unmounted);
        }
        self.form.update(FormState::finish_submit);

        match result {
            Ok(session) => {
                self.notifier.notify(Notification::login_success());
                self.navigator.replace(HOME_PATH);
                Ok(session)
            }
            Err(e) => {
                leptos::logging::warn!("sign-in failed: {e}");
                self.notifier.notify(Notification::invalid_credentials());
                Err(e.into())
            }
        }
    }
}
