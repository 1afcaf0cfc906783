//! Driver registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by a host (usually inside a dialog). Calls `on_success` after the
//! driver is created, and also from Cancel, so the host can close itself.

use leptos::prelude::*;

use super::form_field::FormField;
use super::toaster::notify;
use crate::config::ApiConfig;
use crate::net::api::{HttpTransporterApi, TransporterApi};
use crate::state::driver_form::{DriverField, DriverFormState};
use crate::state::toast::ToastState;

#[component]
pub fn DriverForm(on_success: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let ttl_ms = config.toast_ttl_ms;
    let api = HttpTransporterApi::new(config);
    let form = RwSignal::new(DriverFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(DriverFormState::begin_submit).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_driver(&payload).await;
            let outcome = form.try_update(|f| f.finish_submit(result.clone())).unwrap_or_else(|| {
                log::debug!("driver form closed before the response arrived");
                DriverFormState::detached_outcome(result)
            });
            notify(toasts, outcome.notice, ttl_ms);
            if outcome.succeeded {
                on_success.run(());
            }
        });
    };

    let submitting = move || form.with(|f| f.submitting);

    let fields = DriverField::ALL
        .into_iter()
        .map(|field| {
            let input_type = if field.is_secret() { "password" } else { "text" };
            view! {
                <FormField
                    id=field.key()
                    label=field.label()
                    value=Signal::derive(move || form.with(|f| f.value(field).to_owned()))
                    error=Signal::derive(move || form.with(|f| f.errors.get(field.key()).map(str::to_owned)))
                    on_input=Callback::new(move |value: String| form.update(|f| f.set_field(field, value)))
                    input_type=input_type
                    required=field.is_required()
                    span=field.span()
                />
            }
        })
        .collect_view();

    view! {
        <form class="entity-form" on:submit=on_submit>
            <div class="entity-form__grid">{fields}</div>
            <div class="entity-form__actions">
                <button type="button" class="btn btn--outline" on:click=move |_| on_success.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary" disabled=submitting>
                    {move || if submitting() { "Submitting..." } else { "Submit" }}
                </button>
            </div>
        </form>
    }
}
