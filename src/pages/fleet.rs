//! Fleet overview page hosting the driver and truck forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists drivers and trucks, and opens the forms in a modal dialog. A form's
//! `on_success` closes the dialog and bumps `refresh_seq`, which refetches both
//! lists.

use leptos::prelude::*;

use crate::components::driver_form::DriverForm;
use crate::components::loader::Loader;
use crate::components::truck_form::TruckForm;
use crate::config::ApiConfig;
use crate::net::api::{HttpTransporterApi, TransporterApi};
use crate::state::fleet::{FleetDialog, FleetState};

#[cfg(test)]
#[path = "fleet_test.rs"]
mod fleet_test;

fn format_quantity(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

#[component]
pub fn FleetPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let api = HttpTransporterApi::new(config);
    let fleet = RwSignal::new(FleetState::default());
    let refresh_seq = Memo::new(move |_| fleet.with(|f| f.refresh_seq));
    let dialog = Memo::new(move |_| fleet.with(|f| f.dialog.clone()));

    Effect::new(move || {
        let seq = refresh_seq.get();
        log::debug!("loading fleet lists (refresh {seq})");
        fleet.update(FleetState::begin_load);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let drivers = api.list_drivers().await;
            let trucks = api.list_trucks().await;
            if fleet.try_update(|f| f.apply_lists(drivers, trucks)).is_none() {
                log::debug!("fleet page unmounted before lists arrived");
            }
        });
    });

    let on_form_done = Callback::new(move |()| fleet.update(FleetState::form_succeeded));

    view! {
        <div class="fleet-page">
            <header class="fleet-page__header">
                <h1>"Fleet"</h1>
                <div class="fleet-page__actions">
                    <button class="btn btn--outline" on:click=move |_| fleet.update(|f| f.open(FleetDialog::NewDriver))>
                        "+ Add Driver"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| fleet.update(|f| f.open(FleetDialog::NewTruck))>
                        "+ Add Truck"
                    </button>
                </div>
            </header>

            <Show when=move || fleet.with(|f| f.error.is_some())>
                <p class="fleet-page__error">{move || fleet.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show when=move || !fleet.with(|f| f.loading) fallback=|| view! { <Loader/> }>
                <section class="fleet-page__section">
                    <h2>"Trucks"</h2>
                    <table class="fleet-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Truck Number"</th>
                                <th>"Driver"</th>
                                <th>"Quantity"</th>
                                <th>"Status"</th>
                                <th>"Movement"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || fleet.with(|f| f.trucks.clone())
                                key=|truck| (truck.id, truck.truck_number.clone())
                                children=move |truck| {
                                    let driver_id = truck.driver_id;
                                    let edit = truck.clone();
                                    view! {
                                        <tr>
                                            <td>{truck.name.clone()}</td>
                                            <td>{truck.truck_number.clone()}</td>
                                            <td>{move || fleet.with(|f| f.driver_name(driver_id))}</td>
                                            <td>{format_quantity(truck.quantity)}</td>
                                            <td>{truck.status.label()}</td>
                                            <td>{truck.movement_status.label()}</td>
                                            <td>
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| {
                                                        let dialog = FleetDialog::EditTruck(edit.clone());
                                                        fleet.update(|f| f.open(dialog));
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </section>

                <section class="fleet-page__section">
                    <h2>"Drivers"</h2>
                    <ul class="fleet-list">
                        <For
                            each=move || fleet.with(|f| f.drivers.clone())
                            key=|driver| driver.id
                            children=move |driver| {
                                view! {
                                    <li class="fleet-list__item">
                                        <span>{driver.display_name()}</span>
                                        <span class="fleet-list__meta">{driver.phone_number.clone().unwrap_or_default()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>
            </Show>

            {move || {
                dialog
                    .get()
                    .map(|dialog| {
                        let title = dialog.title();
                        let body = match dialog {
                            FleetDialog::NewDriver => view! { <DriverForm on_success=on_form_done/> }.into_any(),
                            FleetDialog::NewTruck => view! { <TruckForm on_success=on_form_done/> }.into_any(),
                            FleetDialog::EditTruck(truck) => {
                                view! { <TruckForm on_success=on_form_done truck=truck/> }.into_any()
                            }
                        };
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| fleet.update(FleetState::close)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{title}</h2>
                                    {body}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
