//! Truck create/edit form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the `TruckForm` component. Inputs are kept as strings while editing
//! and converted to numbers only when the payload is built. The driver select
//! uses the `"unassigned"` control value for "no driver"; state and payload
//! carry a real `Option<i64>` instead.
//!
//! TRADE-OFFS
//! ==========
//! A blank numeric input is rejected with "Must be a valid number"; it is
//! never sent as 0. Browsers also report "" for a number input holding
//! unparseable text, and that case is rejected the same way.

#[cfg(test)]
#[path = "truck_form_test.rs"]
mod truck_form_test;

use super::form::{FormErrors, INVALID_NUMBER, SubmitOutcome, apply_failure, is_blank, parse_non_negative};
use super::toast::Notice;
use crate::net::api::TransporterApi;
use crate::net::error::ApiError;
use crate::net::types::{Driver, MovementStatus, Truck, TruckMode, TruckPayload, TruckStatus};

/// Select-control value standing in for "no driver".
pub const UNASSIGNED: &str = "unassigned";
pub const TRUCK_SAVE_FAILED: &str = "Failed to save truck";
pub const DRIVERS_LOAD_FAILED: &str = "Failed to load drivers list";

/// Driver assignment as the form sees it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverChoice {
    #[default]
    Unassigned,
    Driver(i64),
}

impl DriverChoice {
    pub fn from_driver_id(id: Option<i64>) -> Self {
        id.map_or(Self::Unassigned, Self::Driver)
    }

    pub fn driver_id(self) -> Option<i64> {
        match self {
            Self::Unassigned => None,
            Self::Driver(id) => Some(id),
        }
    }

    /// Value used by the `<select>` element.
    pub fn control_value(self) -> String {
        match self {
            Self::Unassigned => UNASSIGNED.to_owned(),
            Self::Driver(id) => id.to_string(),
        }
    }

    pub fn from_control_value(raw: &str) -> Option<Self> {
        if raw == UNASSIGNED {
            return Some(Self::Unassigned);
        }
        match raw.parse::<i64>() {
            Ok(id) => Some(Self::Driver(id)),
            Err(_) => None,
        }
    }
}

/// Free-text and numeric inputs on the truck form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TruckField {
    Name,
    TruckNumber,
    Description,
    Quantity,
    Compartment,
    CalibrateOne,
    CalibrateTwo,
    CalibrateThree,
}

impl TruckField {
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::TruckNumber,
        Self::Description,
        Self::Quantity,
        Self::Compartment,
        Self::CalibrateOne,
        Self::CalibrateTwo,
        Self::CalibrateThree,
    ];

    pub const NUMERIC: [Self; 5] =
        [Self::Quantity, Self::Compartment, Self::CalibrateOne, Self::CalibrateTwo, Self::CalibrateThree];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::TruckNumber => "truck_number",
            Self::Description => "description",
            Self::Quantity => "quantity",
            Self::Compartment => "compartment",
            Self::CalibrateOne => "calibrate_one",
            Self::CalibrateTwo => "calibrate_two",
            Self::CalibrateThree => "calibrate_three",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::TruckNumber => "Truck Number",
            Self::Description => "Description",
            Self::Quantity => "Quantity",
            Self::Compartment => "Compartment",
            Self::CalibrateOne => "Calibrate One",
            Self::CalibrateTwo => "Calibrate Two",
            Self::CalibrateThree => "Calibrate Three",
        }
    }

    /// Whether the label carries the required marker.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::TruckNumber | Self::Quantity | Self::Compartment)
    }

    pub fn is_numeric(self) -> bool {
        Self::NUMERIC.contains(&self)
    }

    pub fn span(self) -> &'static str {
        match self {
            Self::Name | Self::TruckNumber => "form-field form-field--half",
            Self::Description => "form-field form-field--full",
            _ => "form-field form-field--quarter",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TruckFormState {
    pub mode: TruckMode,
    pub driver: DriverChoice,
    pub name: String,
    pub truck_number: String,
    pub description: String,
    pub quantity: String,
    pub compartment: String,
    pub calibrate_one: String,
    pub calibrate_two: String,
    pub calibrate_three: String,
    pub status: TruckStatus,
    pub movement_status: MovementStatus,
    pub errors: FormErrors,
    pub submitting: bool,
    /// Options for the driver select; empty until the list loads.
    pub drivers: Vec<Driver>,
}

impl Default for TruckFormState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TruckFormState {
    /// Fresh state for create mode, or seeded from `truck` for edit mode.
    pub fn new(truck: Option<&Truck>) -> Self {
        let number = |n: Option<f64>| n.map_or_else(|| "0".to_owned(), |n| n.to_string());
        let truck = truck.cloned().unwrap_or_default();
        Self {
            mode: truck.mode(),
            driver: DriverChoice::from_driver_id(truck.driver_id),
            name: truck.name,
            truck_number: truck.truck_number,
            description: truck.description.unwrap_or_default(),
            quantity: number(truck.quantity),
            compartment: number(truck.compartment),
            calibrate_one: number(truck.calibrate_one),
            calibrate_two: number(truck.calibrate_two),
            calibrate_three: number(truck.calibrate_three),
            status: truck.status,
            movement_status: truck.movement_status,
            errors: FormErrors::new(),
            submitting: false,
            drivers: Vec::new(),
        }
    }

    pub fn value(&self, field: TruckField) -> &str {
        match field {
            TruckField::Name => &self.name,
            TruckField::TruckNumber => &self.truck_number,
            TruckField::Description => &self.description,
            TruckField::Quantity => &self.quantity,
            TruckField::Compartment => &self.compartment,
            TruckField::CalibrateOne => &self.calibrate_one,
            TruckField::CalibrateTwo => &self.calibrate_two,
            TruckField::CalibrateThree => &self.calibrate_three,
        }
    }

    fn value_mut(&mut self, field: TruckField) -> &mut String {
        match field {
            TruckField::Name => &mut self.name,
            TruckField::TruckNumber => &mut self.truck_number,
            TruckField::Description => &mut self.description,
            TruckField::Quantity => &mut self.quantity,
            TruckField::Compartment => &mut self.compartment,
            TruckField::CalibrateOne => &mut self.calibrate_one,
            TruckField::CalibrateTwo => &mut self.calibrate_two,
            TruckField::CalibrateThree => &mut self.calibrate_three,
        }
    }

    pub fn set_field(&mut self, field: TruckField, value: String) {
        *self.value_mut(field) = value;
        self.errors.clear_field(field.key());
    }

    pub fn set_driver(&mut self, choice: DriverChoice) {
        self.driver = choice;
        self.errors.clear_field("driver_id");
    }

    /// Apply a raw `<select>` value; unknown values leave the choice as is.
    pub fn set_driver_control(&mut self, raw: &str) {
        match DriverChoice::from_control_value(raw) {
            Some(choice) => self.set_driver(choice),
            None => log::warn!("ignoring unknown driver option {raw:?}"),
        }
    }

    pub fn set_status(&mut self, status: TruckStatus) {
        self.status = status;
    }

    pub fn set_movement_status(&mut self, movement_status: MovementStatus) {
        self.movement_status = movement_status;
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if is_blank(&self.name) {
            errors.insert(TruckField::Name.key(), "Name is required");
        }
        if is_blank(&self.truck_number) {
            errors.insert(TruckField::TruckNumber.key(), "Truck number is required");
        }
        for field in TruckField::NUMERIC {
            if parse_non_negative(self.value(field)).is_none() {
                errors.insert(field.key(), INVALID_NUMBER);
            }
        }
        errors
    }

    pub fn validate_in_place(&mut self) -> bool {
        self.errors = self.validate();
        self.errors.is_empty()
    }

    /// Request body for the current values, or `None` if a numeric field
    /// does not parse.
    pub fn payload(&self) -> Option<TruckPayload> {
        let num = |field| parse_non_negative(self.value(field));
        Some(TruckPayload {
            driver_id: self.driver.driver_id(),
            name: self.name.clone(),
            description: self.description.clone(),
            truck_number: self.truck_number.clone(),
            quantity: num(TruckField::Quantity)?,
            compartment: num(TruckField::Compartment)?,
            calibrate_one: num(TruckField::CalibrateOne)?,
            calibrate_two: num(TruckField::CalibrateTwo)?,
            calibrate_three: num(TruckField::CalibrateThree)?,
            status: self.status,
            movement_status: self.movement_status,
        })
    }

    /// Validate and mark the form in flight; `None` means no request.
    pub fn begin_submit(&mut self) -> Option<TruckPayload> {
        if self.submitting || !self.validate_in_place() {
            return None;
        }
        let payload = self.payload()?;
        self.submitting = true;
        Some(payload)
    }

    /// Apply the save response. Always clears `submitting`.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                log::debug!("truck saved ({:?})", self.mode);
                SubmitOutcome::success(self.mode.success_message())
            }
            Err(err) => apply_failure(&mut self.errors, &err, TRUCK_SAVE_FAILED),
        }
    }

    /// Outcome for a response that arrives after the form was unmounted.
    pub fn detached_outcome(mode: TruckMode, result: Result<(), ApiError>) -> SubmitOutcome {
        Self { mode, ..Self::new(None) }.finish_submit(result)
    }

    /// Run a full submission against `api`, choosing create or update by mode.
    pub async fn submit<A>(&mut self, api: &A, on_success: impl FnOnce()) -> Option<SubmitOutcome>
    where
        A: TransporterApi + ?Sized,
    {
        let payload = self.begin_submit()?;
        let result = api.save_truck(self.mode, &payload).await;
        let outcome = self.finish_submit(result);
        if outcome.succeeded {
            on_success();
        }
        Some(outcome)
    }

    /// Store the fetched driver list. A failure leaves the list empty and
    /// returns a notice for the user; the form stays usable.
    pub fn apply_drivers(&mut self, result: Result<Vec<Driver>, ApiError>) -> Option<Notice> {
        match result {
            Ok(drivers) => {
                self.drivers = drivers;
                None
            }
            Err(err) => {
                log::error!("error fetching drivers: {err}");
                self.drivers.clear();
                Some(Notice::error(DRIVERS_LOAD_FAILED))
            }
        }
    }

    /// Fetch the driver list through `api` and store it.
    pub async fn load_drivers<A>(&mut self, api: &A) -> Option<Notice>
    where
        A: TransporterApi + ?Sized,
    {
        let result = api.list_drivers().await;
        self.apply_drivers(result)
    }
}
