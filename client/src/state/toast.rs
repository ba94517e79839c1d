//! Toast queue backing the notification sink.
//!
//! DESIGN
//! ======
//! At most [`TOAST_LIMIT`] toasts are visible; a new toast pushes the oldest
//! out. Ids only ever grow so a late auto-dismiss timer cannot close a newer
//! toast that reused a slot.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::util::notify::{Notification, NotificationSink};

pub const TOAST_LIMIT: usize = 1;
#[cfg(feature = "hydrate")]
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Visible toasts, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Add a toast and return its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(0, Toast { id, notification });
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Copyable handle to the app-wide toast queue, provided as context.
#[derive(Clone, Copy, Debug)]
pub struct ToastQueue {
    state: RwSignal<ToastState>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ToastState::default()) }
    }

    pub fn state(&self) -> RwSignal<ToastState> {
        self.state
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.state.try_update(|s| s.dismiss(id));
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: Notification) {
        let Some(id) = self.state.try_update(|s| s.push(notification)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let queue = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                queue.dismiss(id);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
