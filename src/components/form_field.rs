//! Labelled input with inline error text, shared by both forms.

use leptos::prelude::*;

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

fn field_label(label: &str, required: bool) -> String {
    if required { format!("{label}*") } else { label.to_owned() }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input form-input--error" } else { "form-input" }
}

/// Text, password or number input bound to one form field.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(default = "form-field")] span: &'static str,
) -> impl IntoView {
    let min = (input_type == "number").then_some("0");

    view! {
        <div class=span>
            <label class="form-label" for=id>{field_label(label, required)}</label>
            <input
                id=id
                type=input_type
                min=min
                class=move || input_class(error.with(Option::is_some))
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.with(Option::is_some)>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
