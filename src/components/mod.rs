//! Leptos components for the fleet screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! `driver_form` and `truck_form` are self-contained: each builds its own
//! `HttpTransporterApi` from the `ApiConfig` context and reports completion
//! through an `on_success` callback. `toaster` renders the shared notice queue
//! both forms push into.

pub mod driver_form;
pub mod form_field;
pub mod loader;
pub mod toaster;
pub mod truck_form;
