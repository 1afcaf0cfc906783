//! Wire DTOs for the transporter API.
//!
//! DESIGN
//! ======
//! Read models (`Driver`, `Truck`) are decoded leniently: ids and numeric
//! columns may arrive as JSON numbers or numeric strings, and nulls fall back
//! to defaults. Unknown status strings decode as `Pending`. A record that
//! still cannot be decoded is dropped by the list decoder in `api` rather
//! than failing the whole list. Write models
//! (`DriverPayload`, `TruckPayload`) are exactly what the forms send.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::api::{HttpMethod, TRUCKS_PATH, truck_path};

/// A driver as listed by `GET /transporters/drivers`.
///
/// Credentials are write-only and never part of this record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub other_name: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub license_details: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Driver {
    /// "First Last", trimmed when either part is missing.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// General operational status of a truck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TruckStatus {
    #[default]
    Pending,
    Moving,
    Delivered,
    Maintenance,
    Idle,
}

impl TruckStatus {
    pub const ALL: [Self; 5] = [Self::Pending, Self::Moving, Self::Delivered, Self::Maintenance, Self::Idle];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Moving => "moving",
            Self::Delivered => "delivered",
            Self::Maintenance => "maintenance",
            Self::Idle => "idle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Moving => "Moving",
            Self::Delivered => "Delivered",
            Self::Maintenance => "Maintenance",
            Self::Idle => "Idle",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Unknown wire values decode as `Pending`.
impl From<String> for TruckStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or_default()
    }
}

/// Whether a truck is currently in transit. Distinct from [`TruckStatus`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MovementStatus {
    #[default]
    Pending,
    Moving,
    Delivered,
}

impl MovementStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Moving, Self::Delivered];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Moving => "moving",
            Self::Delivered => "delivered",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Moving => "Moving",
            Self::Delivered => "Delivered",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

impl From<String> for MovementStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or_default()
    }
}

/// A truck as listed by `GET /transporters/trucks` or handed to the edit form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub driver_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub truck_number: String,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub compartment: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub calibrate_one: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub calibrate_two: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_number")]
    pub calibrate_three: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TruckStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub movement_status: MovementStatus,
}

impl Truck {
    /// Edit mode when the record carries an identity, create mode otherwise.
    pub fn mode(&self) -> TruckMode {
        self.id.map_or(TruckMode::Create, |id| TruckMode::Edit { id })
    }
}

/// Create-vs-update selector for truck submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TruckMode {
    #[default]
    Create,
    Edit { id: i64 },
}

impl TruckMode {
    pub fn for_record(truck: Option<&Truck>) -> Self {
        truck.map_or(Self::Create, Truck::mode)
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    pub fn method(self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::Edit { .. } => HttpMethod::Put,
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::Create => TRUCKS_PATH.to_owned(),
            Self::Edit { id } => truck_path(id),
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Create => "Truck created successfully",
            Self::Edit { .. } => "Truck updated successfully",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Add Truck",
            Self::Edit { .. } => "Update Truck",
        }
    }
}

/// Body of `POST /transporters/drivers`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriverPayload {
    pub first_name: String,
    pub last_name: String,
    pub other_name: String,
    pub license_number: String,
    pub license_details: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub password: String,
    pub password_confirmation: String,
}

impl fmt::Debug for DriverPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverPayload")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("other_name", &self.other_name)
            .field("license_number", &self.license_number)
            .field("license_details", &self.license_details)
            .field("phone_number", &self.phone_number)
            .field("address", &self.address)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("country", &self.country)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /transporters/trucks` and `PUT /transporters/trucks/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TruckPayload {
    pub driver_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub truck_number: String,
    pub quantity: f64,
    pub compartment: f64,
    pub calibrate_one: f64,
    pub calibrate_two: f64,
    pub calibrate_three: f64,
    pub status: TruckStatus,
    pub movement_status: MovementStatus,
}

/// Response of `POST /transporters/drivers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateDriverResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// `{ "data": [...] }` list wrapper used by the index endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_opt_id(deserializer)?.ok_or_else(|| D::Error::custom("missing id"))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            Err(D::Error::custom(format!("expected integer id, got {number}")))
        }
        serde_json::Value::String(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            raw.parse::<i64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected integer id, got {raw:?}")))
        }
        other => Err(D::Error::custom(format!("expected id, got {other}"))),
    }
}

fn deserialize_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => Ok(number.as_f64()),
        serde_json::Value::String(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Some(n)),
                _ => Err(D::Error::custom(format!("expected number, got {raw:?}"))),
            }
        }
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}
