use std::cell::RefCell;
use std::pin::pin;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::net::auth::AuthError;
use crate::net::types::UserIdentity;
use crate::state::session::LoginView;

// =============================================================
// Test doubles
// =============================================================

#[derive(Default)]
struct FakeAuth {
    current_user: Option<UserIdentity>,
    probe_fails: bool,
    offline: bool,
    calls: RefCell<Vec<(String, String)>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

fn user() -> UserIdentity {
    UserIdentity { id: "u1".to_owned(), email: Some("user@test.com".to_owned()), role: Some("authenticated".to_owned()) }
}

impl AuthClient for Rc<FakeAuth> {
    async fn get_current_user(&self) -> Result<Option<UserIdentity>, AuthError> {
        if self.probe_fails {
            return Err(AuthError::Transport("network down".to_owned()));
        }
        Ok(self.current_user.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.calls.borrow_mut().push((email.to_owned(), password.to_owned()));
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if self.offline {
            return Err(AuthError::Transport("network down".to_owned()));
        }
        if password != "rightpass" {
            return Err(AuthError::Rejected { reason: "Invalid login credentials".to_owned() });
        }
        Ok(Session {
            access_token: "at".to_owned(),
            token_type: "bearer".to_owned(),
            expires_in: 3600,
            expires_at: None,
            refresh_token: "rt".to_owned(),
            user: user(),
        })
    }
}

#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<Notification>>>);

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}

#[derive(Clone, Default)]
struct RecordingNavigator(Rc<RefCell<Vec<String>>>);

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.0.borrow_mut().push(path.to_owned());
    }
}

struct Harness {
    auth: Rc<FakeAuth>,
    sink: RecordingSink,
    nav: RecordingNavigator,
    controller: LoginController<Rc<FakeAuth>, RecordingSink, RecordingNavigator>,
}

fn harness(auth: FakeAuth) -> Harness {
    let auth = Rc::new(auth);
    let sink = RecordingSink::default();
    let nav = RecordingNavigator::default();
    let controller = LoginController::new(Rc::clone(&auth), sink.clone(), nav.clone());
    Harness { auth, sink, nav, controller }
}

fn fill(controller: &LoginController<Rc<FakeAuth>, RecordingSink, RecordingNavigator>, email: &str, password: &str) {
    controller.input(Field::Email, email.to_owned());
    controller.blur(Field::Email);
    controller.input(Field::Password, password.to_owned());
    controller.blur(Field::Password);
}

// =============================================================
// Session probe
// =============================================================

#[test]
fn probe_with_existing_user_suppresses_form() {
    let h = harness(FakeAuth { current_user: Some(user()), ..FakeAuth::default() });
    assert_eq!(h.controller.session().get_untracked().view(), LoginView::LoginForm);
    block_on(h.controller.probe_session());
    assert_eq!(h.controller.session().get_untracked().view(), LoginView::AlreadyAuthenticated);
}

#[test]
fn probe_without_session_keeps_form() {
    let h = harness(FakeAuth::default());
    block_on(h.controller.probe_session());
    assert_eq!(h.controller.session().get_untracked().view(), LoginView::LoginForm);
}

#[test]
fn probe_failure_is_swallowed() {
    let h = harness(FakeAuth { probe_fails: true, ..FakeAuth::default() });
    block_on(h.controller.probe_session());
    assert_eq!(h.controller.session().get_untracked().view(), LoginView::LoginForm);
    assert!(h.sink.0.borrow().is_empty());
}

#[test]
fn probe_resolving_after_unmount_is_ignored() {
    let h = harness(FakeAuth { current_user: Some(user()), ..FakeAuth::default() });
    h.controller.unmount();
    block_on(h.controller.probe_session());
    assert_eq!(h.controller.session().get_untracked().user, None);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn wrong_password_shows_invalid_credentials_and_keeps_values() {
    let h = harness(FakeAuth::default());
    fill(&h.controller, "user@test.com", "wrongpass");

    let result = block_on(h.controller.submit());

    assert!(matches!(result, Err(SubmitError::Auth(AuthError::Rejected { .. }))));
    assert_eq!(*h.sink.0.borrow(), vec![Notification::invalid_credentials()]);
    let form = h.controller.form().get_untracked();
    assert!(!form.is_submitting());
    assert_eq!(form.value(Field::Email), "user@test.com");
    assert_eq!(form.value(Field::Password), "wrongpass");
    assert!(h.nav.0.borrow().is_empty());
}

#[test]
fn transport_failure_shows_same_generic_toast() {
    let h = harness(FakeAuth { offline: true, ..FakeAuth::default() });
    fill(&h.controller, "user@test.com", "rightpass");

    let result = block_on(h.controller.submit());

    assert!(matches!(result, Err(SubmitError::Auth(AuthError::Transport(_)))));
    assert_eq!(*h.sink.0.borrow(), vec![Notification::invalid_credentials()]);
    assert!(!h.controller.form().get_untracked().is_submitting());
}

#[test]
fn right_password_notifies_and_navigates_home_once() {
    let h = harness(FakeAuth::default());
    fill(&h.controller, "user@test.com", "rightpass");

    let session = block_on(h.controller.submit()).unwrap();

    assert_eq!(session.user, user());
    assert_eq!(*h.sink.0.borrow(), vec![Notification::login_success()]);
    assert_eq!(*h.nav.0.borrow(), vec!["/".to_owned()]);
    assert_eq!(
        *h.auth.calls.borrow(),
        vec![("user@test.com".to_owned(), "rightpass".to_owned())]
    );
}

#[test]
fn invalid_form_reports_request_failed_without_calling_provider() {
    let h = harness(FakeAuth::default());
    h.controller.input(Field::Email, "user".to_owned());

    let result = block_on(h.controller.submit());

    assert!(matches!(result, Err(SubmitError::InvalidForm(_))));
    assert_eq!(*h.sink.0.borrow(), vec![Notification::request_failed()]);
    assert!(h.auth.calls.borrow().is_empty());
    let form = h.controller.form().get_untracked();
    assert!(!form.is_submitting());
    assert!(form.error(Field::Password).is_some());
}

#[test]
fn double_submit_calls_provider_once() {
    let (release, gate) = oneshot::channel();
    let h = harness(FakeAuth { gate: RefCell::new(Some(gate)), ..FakeAuth::default() });
    fill(&h.controller, "user@test.com", "rightpass");

    block_on(async {
        let mut first = pin!(h.controller.submit());
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(h.controller.form().get_untracked().is_submitting());

        assert_eq!(h.controller.submit().await, Err(SubmitError::AlreadySubmitting));

        release.send(()).unwrap();
        assert!(first.await.is_ok());
    });

    assert_eq!(h.auth.calls.borrow().len(), 1);
    assert_eq!(h.nav.0.borrow().len(), 1);
}

#[test]
fn sign_in_resolving_after_unmount_has_no_effect() {
    let (release, gate) = oneshot::channel();
    let h = harness(FakeAuth { gate: RefCell::new(Some(gate)), ..FakeAuth::default() });
    fill(&h.controller, "user@test.com", "rightpass");

    let result = block_on(async {
        let mut pending = pin!(h.controller.submit());
        assert!(futures::poll!(pending.as_mut()).is_pending());
        h.controller.unmount();
        release.send(()).unwrap();
        pending.await
    });

    assert_eq!(result, Err(SubmitError::Unmounted));
    assert!(h.sink.0.borrow().is_empty());
    assert!(h.nav.0.borrow().is_empty());
}

#[test]
fn submit_after_unmount_is_refused() {
    let h = harness(FakeAuth::default());
    fill(&h.controller, "user@test.com", "rightpass");
    h.controller.unmount();
    assert_eq!(block_on(h.controller.submit()), Err(SubmitError::Unmounted));
    assert!(h.auth.calls.borrow().is_empty());
}
