//! Form-state building blocks shared by the driver and truck forms.
//!
//! DESIGN
//! ======
//! Each form keeps its values, a `FormErrors` map and a `submitting` flag in
//! one plain struct held by a single signal. Validation is a pure function of
//! the values; submission is split into `begin_submit` (validate, mark in
//! flight, produce payload) and `finish_submit` (clear the flag, apply the
//! response) so the network call sits between two synchronous state updates.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use super::toast::Notice;
use crate::net::error::ApiError;

pub const FIX_FORM_ERRORS: &str = "Please fix the form errors";
pub const INVALID_NUMBER: &str = "Must be a valid number";

/// Field name → message for every field currently in error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_owned(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Drop one field's error, e.g. when the user edits it.
    pub fn clear_field(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    /// Overlay backend-reported errors; incoming messages win on conflict.
    pub fn merge(&mut self, other: &BTreeMap<String, String>) {
        for (field, message) in other {
            self.0.insert(field.clone(), message.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Result of `finish_submit`: what to tell the user and whether the host
/// should be notified of success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    pub succeeded: bool,
}

impl SubmitOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self { notice: Notice::success(message), succeeded: true }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { notice: Notice::error(message), succeeded: false }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse a numeric input, accepting only finite values `>= 0`.
pub fn parse_non_negative(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

/// Shared reaction to a failed request.
///
/// Field errors from the backend are merged into `errors` with a generic
/// notice; otherwise the server message or `fallback` is shown.
pub fn apply_failure(errors: &mut FormErrors, err: &ApiError, fallback: &str) -> SubmitOutcome {
    log::error!("request failed: {err}");
    let failure = err.failure();
    if let Some(field_errors) = failure.and_then(|f| f.field_errors.as_ref()) {
        errors.merge(field_errors);
        return SubmitOutcome::failure(FIX_FORM_ERRORS);
    }
    let message = failure
        .and_then(|f| f.message.clone())
        .unwrap_or_else(|| fallback.to_owned());
    SubmitOutcome::failure(message)
}
