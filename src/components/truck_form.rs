//! Truck create/edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edit mode when `truck` carries an id, create mode otherwise. Loads the
//! driver list on mount for the assignment select; a failed load is reported
//! and the form stays usable with only "Unassigned" available. Numeric inputs
//! left blank fail validation rather than submitting 0.

use leptos::prelude::*;

use super::form_field::FormField;
use super::toaster::notify;
use crate::config::ApiConfig;
use crate::net::api::{HttpTransporterApi, TransporterApi};
use crate::net::types::{MovementStatus, Truck, TruckStatus};
use crate::state::toast::ToastState;
use crate::state::truck_form::{DriverChoice, TruckField, TruckFormState, UNASSIGNED};

#[component]
pub fn TruckForm(on_success: Callback<()>, #[prop(optional)] truck: Option<Truck>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let ttl_ms = config.toast_ttl_ms;
    let api = HttpTransporterApi::new(config);
    let form = RwSignal::new(TruckFormState::new(truck.as_ref()));
    let mode = form.with_untracked(|f| f.mode);

    let fetch_api = api.clone();
    leptos::task::spawn_local(async move {
        let result = fetch_api.list_drivers().await;
        if let Some(notice) = form.try_update(|f| f.apply_drivers(result)).flatten() {
            notify(toasts, notice, ttl_ms);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(TruckFormState::begin_submit).flatten() else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.save_truck(mode, &payload).await;
            let outcome = form.try_update(|f| f.finish_submit(result.clone())).unwrap_or_else(|| {
                log::debug!("truck form closed before the response arrived");
                TruckFormState::detached_outcome(mode, result)
            });
            notify(toasts, outcome.notice, ttl_ms);
            if outcome.succeeded {
                on_success.run(());
            }
        });
    };

    let submitting = move || form.with(|f| f.submitting);
    let driver_error = move || form.with(|f| f.errors.get("driver_id").map(str::to_owned));

    let fields = TruckField::ALL
        .into_iter()
        .map(|field| {
            let input_type = if field.is_numeric() { "number" } else { "text" };
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

    let status_options = TruckStatus::ALL
        .into_iter()
        .map(|status| {
            view! {
                <option value=status.as_str() selected=move || form.with(|f| f.status == status)>
                    {status.label()}
                </option>
            }
        })
        .collect_view();

    let movement_options = MovementStatus::ALL
        .into_iter()
        .map(|movement| {
            view! {
                <option value=movement.as_str() selected=move || form.with(|f| f.movement_status == movement)>
                    {movement.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <form class="entity-form" on:submit=on_submit>
            <div class="entity-form__grid">
                <div class="form-field form-field--full">
                    <label class="form-label" for="driver_id">"Assigned Driver"</label>
                    <select
                        id="driver_id"
                        class="form-select"
                        on:change=move |ev| form.update(|f| f.set_driver_control(&event_target_value(&ev)))
                    >
                        <option
                            value=UNASSIGNED
                            selected=move || form.with(|f| f.driver == DriverChoice::Unassigned)
                        >
                            "Unassigned"
                        </option>
                        <For
                            each=move || form.with(|f| f.drivers.clone())
                            key=|driver| driver.id
                            children=move |driver| {
                                let choice = DriverChoice::Driver(driver.id);
                                view! {
                                    <option
                                        value=choice.control_value()
                                        selected=move || form.with(|f| f.driver == choice)
                                    >
                                        {driver.display_name()}
                                    </option>
                                }
                            }
                        />
                    </select>
                    <Show when=move || driver_error().is_some()>
                        <p class="form-error">{move || driver_error().unwrap_or_default()}</p>
                    </Show>
                </div>

                {fields}

                <div class="form-field form-field--half">
                    <label class="form-label" for="status">"Status"</label>
                    <select
                        id="status"
                        class="form-select"
                        on:change=move |ev| {
                            if let Some(status) = TruckStatus::parse(&event_target_value(&ev)) {
                                form.update(|f| f.set_status(status));
                            }
                        }
                    >
                        {status_options}
                    </select>
                </div>

                <div class="form-field form-field--half">
                    <label class="form-label" for="movement_status">"Movement Status"</label>
                    <select
                        id="movement_status"
                        class="form-select"
                        on:change=move |ev| {
                            if let Some(movement) = MovementStatus::parse(&event_target_value(&ev)) {
                                form.update(|f| f.set_movement_status(movement));
                            }
                        }
                    >
                        {movement_options}
                    </select>
                </div>
            </div>
            <div class="entity-form__actions">
                <button
                    type="button"
                    class="btn btn--outline"
                    disabled=submitting
                    on:click=move |_| on_success.run(())
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary" disabled=submitting>
                    {move || if submitting() { "Saving..." } else { mode.submit_label() }}
                </button>
            </div>
        </form>
    }
}
