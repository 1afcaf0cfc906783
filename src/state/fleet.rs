//! Fleet overview state for the host page.
//!
//! DESIGN
//! ======
//! The host owns the lists and which dialog is open; the forms inside the
//! dialogs own their own state and only report success back.

#[cfg(test)]
#[path = "fleet_test.rs"]
mod fleet_test;

use crate::net::error::ApiError;
use crate::net::types::{Driver, Truck};

/// Which form dialog is open, if any.
#[derive(Clone, Debug, PartialEq)]
pub enum FleetDialog {
    NewDriver,
    NewTruck,
    EditTruck(Truck),
}

impl FleetDialog {
    pub fn title(&self) -> &'static str {
        match self {
            Self::NewDriver => "Add Driver",
            Self::NewTruck => "Add Truck",
            Self::EditTruck(_) => "Edit Truck",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FleetState {
    pub drivers: Vec<Driver>,
    pub trucks: Vec<Truck>,
    pub loading: bool,
    pub error: Option<String>,
    pub dialog: Option<FleetDialog>,
    /// Bumped to request a reload of both lists.
    pub refresh_seq: u64,
}

impl FleetState {
    pub fn open(&mut self, dialog: FleetDialog) {
        self.dialog = Some(dialog);
    }

    pub fn close(&mut self) {
        self.dialog = None;
    }

    /// A form reported success: close its dialog and reload.
    pub fn form_succeeded(&mut self) {
        self.dialog = None;
        self.refresh_seq += 1;
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_lists(&mut self, drivers: Result<Vec<Driver>, ApiError>, trucks: Result<Vec<Truck>, ApiError>) {
        self.loading = false;
        let mut failures = Vec::new();
        match drivers {
            Ok(list) => self.drivers = list,
            Err(err) => failures.push(format!("drivers: {err}")),
        }
        match trucks {
            Ok(list) => self.trucks = list,
            Err(err) => failures.push(format!("trucks: {err}")),
        }
        self.error = if failures.is_empty() {
            None
        } else {
            log::error!("fleet refresh failed: {}", failures.join("; "));
            Some(format!("Could not load {}", failures.join("; ")))
        };
    }

    /// Display name of a truck's assigned driver.
    pub fn driver_name(&self, driver_id: Option<i64>) -> String {
        let Some(id) = driver_id else {
            return "Unassigned".to_owned();
        };
        self.drivers
            .iter()
            .find(|d| d.id == id)
            .map_or_else(|| format!("Driver #{id}"), Driver::display_name)
    }
}
