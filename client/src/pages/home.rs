//! Landing route reached after a successful sign-in.
//!
//! The application home lives elsewhere; this placeholder keeps `/` from
//! resolving to the router's not-found fallback.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::brand_mark::BrandMark;

pub(crate) const HOME_MESSAGE: &str = "Welcome to KHYN HQ.";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home"/>
        <div class="home-page">
            <BrandMark/>
            <p class="home-page__message">{HOME_MESSAGE}</p>
        </div>
    }
}
