//! Labelled text input bound to a string signal.
//!
//! DESIGN
//! ======
//! Centralizes the label + input markup the auth and feedback forms repeat,
//! so field styling and wiring stay consistent across pages.

use leptos::prelude::*;

/// A labelled single-line input writing through to `value`.
#[component]
pub fn InputField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field" for=name>
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// A labelled multi-line input writing through to `value`.
#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field" for=name>
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--multiline"
                id=name
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
        </label>
    }
}
