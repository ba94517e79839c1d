//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::toast::ToastQueue;

/// Path segment of the post-login destination (`/`).
pub(crate) const HOME_SEGMENT: &str = "";
pub(crate) const NOT_FOUND_TEXT: &str = "Page not found.";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue and mounts the toast viewport next to the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ToastQueue::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/khyn-hq.css"/>
        <Title formatter=|text: String| format!("{text} | KHYN HQ")/>

        <Router>
            <Routes fallback=|| NOT_FOUND_TEXT.into_view()>
                <Route path=StaticSegment(HOME_SEGMENT) view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
