//! Client configuration resolved at build time.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment at runtime, so values are baked in
//! through `option_env!` and parsed by a pure function over optional raw
//! strings. The backend error schema keys live here too: the shape of failure
//! bodies is a backend contract, not something the forms hardcode.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_ERRORS_KEY: &str = "errors";
pub const DEFAULT_MESSAGE_KEY: &str = "message";
pub const DEFAULT_TOAST_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Unparsed configuration values, typically from `option_env!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConfig<'a> {
    pub base_url: Option<&'a str>,
    pub errors_key: Option<&'a str>,
    pub message_key: Option<&'a str>,
    pub toast_ttl_ms: Option<&'a str>,
}

/// Backend location and response-schema settings shared by every form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix prepended to every endpoint path, without a trailing slash.
    pub base_url: String,
    /// Key of the field-error mapping in failure bodies.
    pub errors_key: String,
    /// Key of the human-readable message in response bodies.
    pub message_key: String,
    /// How long a toast stays on screen.
    pub toast_ttl_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            errors_key: DEFAULT_ERRORS_KEY.to_owned(),
            message_key: DEFAULT_MESSAGE_KEY.to_owned(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
        }
    }
}

impl ApiConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `FLEET_API_BASE_URL`: default `/api`
    /// - `FLEET_API_ERRORS_KEY`: default `errors`
    /// - `FLEET_API_MESSAGE_KEY`: default `message`
    /// - `FLEET_TOAST_TTL_MS`: default 4000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a provided value cannot be used.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_raw(RawConfig {
            base_url: option_env!("FLEET_API_BASE_URL"),
            errors_key: option_env!("FLEET_API_ERRORS_KEY"),
            message_key: option_env!("FLEET_API_MESSAGE_KEY"),
            toast_ttl_ms: option_env!("FLEET_TOAST_TTL_MS"),
        })
    }

    /// Parse raw values, filling defaults for anything absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a base URL containing whitespace,
    /// an empty schema key, or a TTL that is not a positive integer.
    pub fn from_raw(raw: RawConfig<'_>) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(raw.base_url)?;
        let errors_key = parse_key("FLEET_API_ERRORS_KEY", raw.errors_key, DEFAULT_ERRORS_KEY)?;
        let message_key = parse_key("FLEET_API_MESSAGE_KEY", raw.message_key, DEFAULT_MESSAGE_KEY)?;
        let toast_ttl_ms = parse_ttl(raw.toast_ttl_ms)?;
        Ok(Self { base_url, errors_key, message_key, toast_ttl_ms })
    }

    /// Join an endpoint path (leading `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let trimmed = raw.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid { var: "FLEET_API_BASE_URL", value: raw.to_owned() });
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}

fn parse_key(var: &'static str, raw: Option<&str>, default: &str) -> Result<String, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(default.to_owned()),
        Some("") => Err(ConfigError::Invalid { var, value: String::new() }),
        Some(key) => Ok(key.to_owned()),
    }
}

fn parse_ttl(raw: Option<&str>) -> Result<u32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TOAST_TTL_MS);
    };
    match raw.trim().parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::Invalid { var: "FLEET_TOAST_TTL_MS", value: raw.to_owned() }),
    }
}
