//! Login page: email + password sign-in against the managed auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering only. Form state, the mount-time session probe and the submit
//! protocol live in `LoginController`; this module wires the browser
//! collaborators into it and maps its signals onto the view.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::rc::Rc;
use std::sync::atomic::Ordering;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::brand_mark::BrandMark;
use crate::components::form_field::FormField;
use crate::config::AuthConfig;
use crate::net::supabase::SupabaseAuthClient;
use crate::pages::login_controller::LoginController;
use crate::state::login::{Field, FormState};
use crate::state::session::{LoginView, SessionStatus};
use crate::state::toast::ToastQueue;
use crate::util::navigate::RouterNavigator;

fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let screen = match AuthConfig::from_build_env() {
        Ok(config) => view! { <LoginScreen config/> }.into_any(),
        Err(e) => {
            leptos::logging::error!("login unavailable: {e}");
            view! { <p class="login-message">"Login is unavailable right now."</p> }.into_any()
        }
    };

    view! {
        <Title text="Login"/>
        <div class="login-page">{screen}</div>
    }
}

#[component]
fn LoginScreen(config: AuthConfig) -> impl IntoView {
    let toasts = expect_context::<ToastQueue>();
    let controller = LoginController::new(
        SupabaseAuthClient::new(config),
        toasts,
        RouterNavigator::new(use_navigate()),
    );
    let form = controller.form();
    let session = controller.session();
    let alive = controller.alive_flag();
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
    let controller = StoredValue::new_local(Rc::new(controller));

    // Fire-and-forget: the form renders first and stays usable meanwhile.
    #[cfg(feature = "hydrate")]
    {
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            controller.probe_session().await;
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let controller = controller.get_value();
            leptos::task::spawn_local(async move {
                let _ = controller.submit().await;
            });
        }
    };

    let value_of = move |field: Field| Signal::derive(move || form.with(|f| f.value(field).to_owned()));
    let error_of = move |field: Field| Signal::derive(move || form.with(|f| f.error(field).map(str::to_owned)));
    let input_of = move |field: Field| {
        Callback::new(move |value: String| controller.with_value(|c| c.input(field, value)))
    };
    let blur_of = move |field: Field| Callback::new(move |()| controller.with_value(|c| c.blur(field)));

    let submitting = move || form.with(FormState::is_submitting);
    let already_authenticated = move || session.with(SessionStatus::view) == LoginView::AlreadyAuthenticated;

    view! {
        <Show
            when=move || !already_authenticated()
            fallback=|| view! { <p class="login-message login-message--done">"You are already logged in!"</p> }
        >
            <div class="login-card">
                <BrandMark/>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <FormField
                        field=Field::Email
                        label="Email"
                        input_type="email"
                        value=value_of(Field::Email)
                        error=error_of(Field::Email)
                        on_input=input_of(Field::Email)
                        on_blur=blur_of(Field::Email)
                    />
                    <FormField
                        field=Field::Password
                        label="Password"
                        input_type="password"
                        value=value_of(Field::Password)
                        error=error_of(Field::Password)
                        on_input=input_of(Field::Password)
                        on_blur=blur_of(Field::Password)
                    />
                    <button
                        class="login-button"
                        class:login-button--loading=submitting
                        type="submit"
                        disabled=move || !form.with(FormState::can_submit)
                    >
                        {move || submit_label(submitting())}
                    </button>
                    <p class="login-card__footer">"By invite only."</p>
                </form>
            </div>
        </Show>
    }
}
