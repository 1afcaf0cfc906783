//! REST calls against the transporter backend.
//!
//! Browser build (`csr`): real HTTP via `gloo-net`.
//! Native build: every call returns [`ApiError::Unavailable`], which keeps the
//! crate compiling and lets form logic be tested against a fake.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying a parsed
//! [`FailureBody`]; callers never see raw bodies. No request is cancelled
//! when the calling component unmounts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, FailureBody};
use super::types::{CreateDriverResponse, Driver, DriverPayload, ListEnvelope, Truck, TruckMode, TruckPayload};
use crate::config::ApiConfig;

pub const DRIVERS_PATH: &str = "/transporters/drivers";
pub const TRUCKS_PATH: &str = "/transporters/trucks";

pub fn truck_path(id: i64) -> String {
    format!("{TRUCKS_PATH}/{id}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// The backend operations the forms depend on.
#[async_trait(?Send)]
pub trait TransporterApi {
    /// `GET /transporters/drivers`
    async fn list_drivers(&self) -> Result<Vec<Driver>, ApiError>;

    /// `POST /transporters/drivers`
    async fn create_driver(&self, payload: &DriverPayload) -> Result<CreateDriverResponse, ApiError>;

    /// `GET /transporters/trucks`
    async fn list_trucks(&self) -> Result<Vec<Truck>, ApiError>;

    /// `POST /transporters/trucks` or `PUT /transporters/trucks/{id}`, per `mode`.
    async fn save_truck(&self, mode: TruckMode, payload: &TruckPayload) -> Result<(), ApiError>;
}

/// [`TransporterApi`] over HTTP, rooted at [`ApiConfig::base_url`].
#[derive(Clone, Debug)]
pub struct HttpTransporterApi {
    config: ApiConfig,
}

impl HttpTransporterApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Turn a response into either its JSON body or an [`ApiError::Status`].
    #[cfg(any(test, feature = "csr"))]
    fn interpret(&self, status: u16, text: &str) -> Result<Value, ApiError> {
        let body = decode_body(text);
        if is_success_status(status) {
            return Ok(body);
        }
        let failure = FailureBody::from_value(&body, &self.config.errors_key, &self.config.message_key);
        log::debug!("request failed with status {status}: {failure:?}");
        Err(ApiError::Status { status, failure })
    }

    #[cfg(feature = "csr")]
    async fn send(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let url = self.config.url(path);
        log::debug!("{} {url}", method.as_str());
        let builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
        }
        .header("Accept", "application/json");

        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        self.interpret(status, &text)
    }

    #[cfg(not(feature = "csr"))]
    async fn send(&self, _method: HttpMethod, _path: &str, _body: Option<Value>) -> Result<Value, ApiError> {
        Err(ApiError::Unavailable)
    }
}

#[async_trait(?Send)]
impl TransporterApi for HttpTransporterApi {
    async fn list_drivers(&self) -> Result<Vec<Driver>, ApiError> {
        let body = self.send(HttpMethod::Get, DRIVERS_PATH, None).await?;
        decode_list(body)
    }

    async fn create_driver(&self, payload: &DriverPayload) -> Result<CreateDriverResponse, ApiError> {
        let body = self.send(HttpMethod::Post, DRIVERS_PATH, Some(encode(payload)?)).await?;
        decode_create_driver(&body, &self.config.message_key)
    }

    async fn list_trucks(&self) -> Result<Vec<Truck>, ApiError> {
        let body = self.send(HttpMethod::Get, TRUCKS_PATH, None).await?;
        decode_list(body)
    }

    async fn save_truck(&self, mode: TruckMode, payload: &TruckPayload) -> Result<(), ApiError> {
        self.send(mode.method(), &mode.path(), Some(encode(payload)?)).await?;
        Ok(())
    }
}

#[cfg(any(test, feature = "csr"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Empty or non-JSON bodies (HTML error pages, 204s) decode to `Null`.
#[cfg(any(test, feature = "csr"))]
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|err| {
        log::debug!("response body is not JSON: {err}");
        Value::Null
    })
}

fn encode<T: serde::Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Records that fail to decode are skipped so the rest of the list survives.
/// Only a body without a usable envelope is an error.
fn decode_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, ApiError> {
    let envelope = serde_json::from_value::<ListEnvelope<Value>>(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let items = envelope
        .data
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<T>(record) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("skipping malformed list record: {err}");
                None
            }
        })
        .collect();
    Ok(items)
}

/// Decode the create-driver body, reading the message from the configured key.
///
/// A missing or non-boolean `success` flag counts as failure.
fn decode_create_driver(body: &Value, message_key: &str) -> Result<CreateDriverResponse, ApiError> {
    let Value::Object(map) = body else {
        return Err(ApiError::Decode("expected JSON object".to_owned()));
    };
    Ok(CreateDriverResponse {
        success: map.get("success").and_then(Value::as_bool).unwrap_or(false),
        message: map.get(message_key).and_then(Value::as_str).map(str::to_owned),
    })
}
