//! Labelled text input with an inline validation message.

use leptos::prelude::*;

use crate::state::login::Field;

/// One login form field. The message under the input appears only while
/// `error` holds a value.
#[component]
pub fn FormField(
    field: Field,
    label: &'static str,
    input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let name = field.name();
    let autocomplete = if field == Field::Password { "current-password" } else { "email" };

    view! {
        <label class="form-item">
            <span class="form-item__label" class:form-item__label--error=move || error.get().is_some()>
                {label}
            </span>
            <input
                class="login-input"
                type=input_type
                name=name
                placeholder=label
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <Show when=move || error.get().is_some()>
                <p class="form-item__message">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}
