//! Driver registration form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the `DriverForm` component. Values live in a `DriverPayload` so the
//! request body is just a copy of the current fields.

#[cfg(test)]
#[path = "driver_form_test.rs"]
mod driver_form_test;

use super::form::{FormErrors, SubmitOutcome, apply_failure, is_blank};
use crate::net::api::TransporterApi;
use crate::net::error::ApiError;
use crate::net::types::{CreateDriverResponse, DriverPayload};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const DRIVER_ADDED: &str = "Driver added successfully";
pub const DRIVER_ADD_FAILED: &str = "Failed to add driver";

/// Every input on the driver form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DriverField {
    FirstName,
    LastName,
    OtherName,
    LicenseNumber,
    LicenseDetails,
    PhoneNumber,
    Address,
    City,
    State,
    Country,
    Password,
    PasswordConfirmation,
}

impl DriverField {
    pub const ALL: [Self; 12] = [
        Self::FirstName,
        Self::LastName,
        Self::OtherName,
        Self::LicenseNumber,
        Self::LicenseDetails,
        Self::PhoneNumber,
        Self::Address,
        Self::City,
        Self::State,
        Self::Country,
        Self::Password,
        Self::PasswordConfirmation,
    ];

    /// Wire name, also the input id and the error-map key.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::OtherName => "other_name",
            Self::LicenseNumber => "license_number",
            Self::LicenseDetails => "license_details",
            Self::PhoneNumber => "phone_number",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::OtherName => "Other Name",
            Self::LicenseNumber => "License Number",
            Self::LicenseDetails => "License Details",
            Self::PhoneNumber => "Phone Number",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Country => "Country",
            Self::Password => "Password",
            Self::PasswordConfirmation => "Confirm Password",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::FirstName | Self::LastName | Self::PhoneNumber | Self::Password | Self::PasswordConfirmation
        )
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::PasswordConfirmation)
    }

    /// Grid width class for the field's container.
    pub fn span(self) -> &'static str {
        match self {
            Self::LicenseDetails => "form-field form-field--full",
            Self::City | Self::State | Self::Country => "form-field form-field--quarter",
            _ => "form-field form-field--half",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverFormState {
    pub fields: DriverPayload,
    pub errors: FormErrors,
    pub submitting: bool,
}

impl DriverFormState {
    pub fn value(&self, field: DriverField) -> &str {
        let f = &self.fields;
        match field {
            DriverField::FirstName => &f.first_name,
            DriverField::LastName => &f.last_name,
            DriverField::OtherName => &f.other_name,
            DriverField::LicenseNumber => &f.license_number,
            DriverField::LicenseDetails => &f.license_details,
            DriverField::PhoneNumber => &f.phone_number,
            DriverField::Address => &f.address,
            DriverField::City => &f.city,
            DriverField::State => &f.state,
            DriverField::Country => &f.country,
            DriverField::Password => &f.password,
            DriverField::PasswordConfirmation => &f.password_confirmation,
        }
    }

    fn value_mut(&mut self, field: DriverField) -> &mut String {
        let f = &mut self.fields;
        match field {
            DriverField::FirstName => &mut f.first_name,
            DriverField::LastName => &mut f.last_name,
            DriverField::OtherName => &mut f.other_name,
            DriverField::LicenseNumber => &mut f.license_number,
            DriverField::LicenseDetails => &mut f.license_details,
            DriverField::PhoneNumber => &mut f.phone_number,
            DriverField::Address => &mut f.address,
            DriverField::City => &mut f.city,
            DriverField::State => &mut f.state,
            DriverField::Country => &mut f.country,
            DriverField::Password => &mut f.password,
            DriverField::PasswordConfirmation => &mut f.password_confirmation,
        }
    }

    /// Store an edited value and clear that field's error.
    pub fn set_field(&mut self, field: DriverField, value: String) {
        *self.value_mut(field) = value;
        self.errors.clear_field(field.key());
    }

    /// Check the current values without touching state.
    ///
    /// An empty password fails the length rule, so it reports the length
    /// message rather than a separate "required" one.
    pub fn validate(&self) -> FormErrors {
        let f = &self.fields;
        let mut errors = FormErrors::new();
        if is_blank(&f.first_name) {
            errors.insert(DriverField::FirstName.key(), "First name is required");
        }
        if is_blank(&f.last_name) {
            errors.insert(DriverField::LastName.key(), "Last name is required");
        }
        if is_blank(&f.phone_number) {
            errors.insert(DriverField::PhoneNumber.key(), "Phone number is required");
        }
        if f.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                DriverField::Password.key(),
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }
        if f.password != f.password_confirmation {
            errors.insert(DriverField::PasswordConfirmation.key(), "Passwords do not match");
        }
        errors
    }

    /// Replace the error map with a fresh validation pass.
    pub fn validate_in_place(&mut self) -> bool {
        self.errors = self.validate();
        self.errors.is_empty()
    }

    /// Validate and mark the form in flight.
    ///
    /// Returns the request body, or `None` when validation fails or a
    /// submission is already pending; no request may be sent in that case.
    pub fn begin_submit(&mut self) -> Option<DriverPayload> {
        if self.submitting || !self.validate_in_place() {
            return None;
        }
        self.submitting = true;
        Some(self.fields.clone())
    }

    /// Apply the create-driver response. Always clears `submitting`.
    pub fn finish_submit(&mut self, result: Result<CreateDriverResponse, ApiError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(resp) if resp.success => {
                log::debug!("driver created");
                self.fields = DriverPayload::default();
                self.errors = FormErrors::new();
                SubmitOutcome::success(DRIVER_ADDED)
            }
            Ok(resp) => {
                log::warn!("driver create rejected: {:?}", resp.message);
                SubmitOutcome::failure(resp.message.unwrap_or_else(|| DRIVER_ADD_FAILED.to_owned()))
            }
            Err(err) => apply_failure(&mut self.errors, &err, DRIVER_ADD_FAILED),
        }
    }

    /// Outcome for a response that arrives after the form was unmounted.
    ///
    /// The request was not aborted, so the user is still told how it went.
    pub fn detached_outcome(result: Result<CreateDriverResponse, ApiError>) -> SubmitOutcome {
        Self::default().finish_submit(result)
    }

    /// Run a full submission against `api`.
    ///
    /// Returns `None` when validation blocked the request. `on_success` runs
    /// only after a successful create.
    pub async fn submit<A>(&mut self, api: &A, on_success: impl FnOnce()) -> Option<SubmitOutcome>
    where
        A: TransporterApi + ?Sized,
    {
        let payload = self.begin_submit()?;
        let result = api.create_driver(&payload).await;
        let outcome = self.finish_submit(result);
        if outcome.succeeded {
            on_success();
        }
        Some(outcome)
    }
}
