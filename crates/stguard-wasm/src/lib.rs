//! JSON and browser/WASM adapter for stguard.
//!
//! The web front end sends `{"source": "...", "language": "st"}` and gets
//! `{"report": {...}}` back. The same entry points serve native callers
//! through [`validate_json`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use stguard_check::{Language, ValidationReport, Validator, ValidatorConfig};
use tracing::debug;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::wasm_bindgen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    message: String,
}

impl EngineError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EngineError {}

type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateRequest {
    pub source: String,
    /// Language tag; Structured Text when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateResponse {
    pub report: ValidationReport,
}

/// Validator shared by the JSON and WASM entry points.
#[derive(Debug, Clone, Default)]
pub struct BrowserValidator {
    validator: Validator,
}

impl BrowserValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            validator: Validator::new(config),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        self.validator.config()
    }

    pub fn validate(&self, request: &ValidateRequest) -> EngineResult<ValidateResponse> {
        if let Some(tag) = &request.language {
            Language::from_tag(tag).map_err(|err| EngineError::new(err.to_string()))?;
        }
        let report = self.validator.validate(&request.source);
        debug!(
            bytes = request.source.len(),
            valid = report.is_valid,
            "validated request"
        );
        Ok(ValidateResponse { report })
    }

    fn validate_json(&self, request_json: &str) -> Result<String, String> {
        let request: ValidateRequest = serde_json::from_str(request_json)
            .map_err(|err| format!("invalid validate request json: {err}"))?;
        let response = self.validate(&request)?;
        json_string(&response)
    }
}

/// Validates one request with the default configuration.
pub fn validate_request(request: &ValidateRequest) -> EngineResult<ValidateResponse> {
    BrowserValidator::new().validate(request)
}

/// JSON in, JSON out. Errors are plain messages for the JS side.
pub fn validate_json(request_json: &str) -> Result<String, String> {
    BrowserValidator::new().validate_json(request_json)
}

#[cfg_attr(all(target_arch = "wasm32", feature = "wasm"), wasm_bindgen)]
pub struct WasmValidator {
    inner: BrowserValidator,
}

#[cfg_attr(all(target_arch = "wasm32", feature = "wasm"), wasm_bindgen)]
impl WasmValidator {
    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(constructor)
    )]
    pub fn new() -> Self {
        Self {
            inner: BrowserValidator::new(),
        }
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = configureJson)
    )]
    pub fn configure_json(&mut self, config_json: &str) -> Result<(), String> {
        let config: ValidatorConfig = serde_json::from_str(config_json)
            .map_err(|err| format!("invalid validator config json: {err}"))?;
        self.inner = BrowserValidator::with_config(config);
        Ok(())
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = validateJson)
    )]
    pub fn validate_json(&self, request_json: &str) -> Result<String, String> {
        self.inner.validate_json(request_json)
    }

    #[cfg_attr(
        all(target_arch = "wasm32", feature = "wasm"),
        wasm_bindgen(js_name = configJson)
    )]
    pub fn config_json(&self) -> Result<String, String> {
        json_string(self.inner.config())
    }
}

impl Default for WasmValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl From<EngineError> for String {
    fn from(value: EngineError) -> Self {
        value.to_string()
    }
}

fn json_string<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| format!("json serialization failed: {err}"))
}
