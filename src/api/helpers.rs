//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! deserialization, error conversion and logging across all API operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::editor::SessionError;
use crate::parse::ImportError;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================
//
// Routed through the `log` facade; the browser build installs `console_log`
// as the backend at module start.

pub fn log_debug(msg: &str) {
    log::debug!("[WASM] {}", msg);
}

pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

pub fn log_warn(msg: &str) {
    log::warn!("[WASM] ⚠️ {}", msg);
}

pub fn log_error(msg: &str) {
    log::error!("[WASM] ❌ {}", msg);
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize an optional value; `undefined`/`null` yields `T::default()`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        deserialize(value, error_context)
    }
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Conversion
// ============================================================================

/// Error object handed to JavaScript: `{ code, message }`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorPayload {
    pub code: &'static str,
    pub message: String,
}

/// Stable machine-readable code for a session error
pub fn error_code(err: &SessionError) -> &'static str {
    match err {
        SessionError::Import(ImportError::NoLyricsBlock) => "noLyricsBlock",
        SessionError::Import(ImportError::NoRecognizableSections) => "noRecognizableSections",
        SessionError::ConfirmationRequired(_) => "confirmationRequired",
        SessionError::UnknownTemplate(_) => "unknownTemplate",
        SessionError::SectionNotFound(_) => "sectionNotFound",
        SessionError::Export(_) => "exportFailed",
    }
}

pub fn error_payload(err: &SessionError) -> ErrorPayload {
    ErrorPayload {
        code: error_code(err),
        message: err.to_string(),
    }
}

/// Convert a session error into a JS value, logging it on the way
pub fn session_error_to_js(err: SessionError) -> JsValue {
    let payload = error_payload(&err);
    wasm_warn!("{} ({})", payload.message, payload.code);
    serde_wasm_bindgen::to_value(&payload).unwrap_or_else(|_| JsValue::from_str(&payload.message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload() {
        let payload = error_payload(&SessionError::Import(ImportError::NoLyricsBlock));
        assert_eq!(payload.code, "noLyricsBlock");
        assert_eq!(payload.message, "Could not find [Lyrics] block in the prompt.");

        let payload = error_payload(&SessionError::ConfirmationRequired("Sure?".to_string()));
        assert_eq!(payload.code, "confirmationRequired");
        assert_eq!(payload.message, "Sure?");
    }
}
