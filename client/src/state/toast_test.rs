use leptos::prelude::*;

use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(Notification::login_success());
    let second = state.push(Notification::invalid_credentials());
    assert!(second > first);
}

#[test]
fn push_keeps_only_newest_toast() {
    let mut state = ToastState::default();
    state.push(Notification::invalid_credentials());
    let newest = state.push(Notification::login_success());
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert_eq!(state.toasts[0].id, newest);
    assert_eq!(state.toasts[0].notification, Notification::login_success());
}

#[test]
fn dismiss_removes_matching_toast_only() {
    let mut state = ToastState::default();
    let id = state.push(Notification::request_failed());
    state.dismiss(id + 100);
    assert_eq!(state.toasts.len(), 1);
    state.dismiss(id);
    assert!(state.toasts.is_empty());
}

#[test]
fn queue_notify_surfaces_toast() {
    let queue = ToastQueue::new();
    queue.notify(Notification::invalid_credentials());
    let toasts = queue.state().get_untracked().toasts;
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].notification.title, "Invalid username or password");
}

#[test]
fn queue_dismiss_clears_toast() {
    let queue = ToastQueue::new();
    queue.notify(Notification::login_success());
    let id = queue.state().get_untracked().toasts[0].id;
    queue.dismiss(id);
    assert!(queue.state().get_untracked().toasts.is_empty());
}
