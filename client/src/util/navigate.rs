//! Navigation capability used after a successful sign-in.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use leptos_router::NavigateOptions;

/// Application home route.
pub const HOME_PATH: &str = "/";

/// Router side effects requested by page logic.
pub trait Navigator {
    /// Redirect without pushing a history entry.
    fn replace(&self, path: &str);
}

/// [`Navigator`] over the closure returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn replace(&self, path: &str) {
        (self.navigate)(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}
