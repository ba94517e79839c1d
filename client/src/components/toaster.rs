//! Toast viewport rendering the app-wide [`ToastQueue`].
//!
//! DESIGN
//! ======
//! The viewport is mounted once by `App`, outside the router, so a toast
//! raised right before a navigation survives the route change.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastQueue};
use crate::util::notify::{RetryAction, Severity};

#[component]
pub fn Toaster() -> impl IntoView {
    let queue = expect_context::<ToastQueue>();
    let state = queue.state();

    view! {
        <ol class="toast-viewport">
            {move || {
                state
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| view! { <ToastItem toast queue/> })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast, queue: ToastQueue) -> impl IntoView {
    let id = toast.id;
    let notification = toast.notification;
    let destructive = notification.severity == Severity::Error;

    view! {
        <li class="toast" class:toast--destructive=destructive role="status">
            <div class="toast__body">
                <p class="toast__title">{notification.title}</p>
                <p class="toast__description">{notification.description}</p>
            </div>
            {notification.retry.map(|RetryAction { label, alt_text }| {
                view! {
                    <button class="toast__action" title=alt_text on:click=move |_| queue.dismiss(id)>
                        {label}
                    </button>
                }
            })}
            <button class="toast__close" title="Close" on:click=move |_| queue.dismiss(id)>
                "✕"
            </button>
        </li>
    }
}
