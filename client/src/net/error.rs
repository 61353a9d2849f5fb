//! Request failure taxonomy for the rental API.
//!
//! ERROR HANDLING
//! ==============
//! Pages distinguish "the server said no" (`Rejected`) from "nothing came
//! back" (`Connectivity`). Validation failures never reach this type; they
//! are stopped by the form before any request is built.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::{ErrorBody, FieldError};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request rejected ({status}): {}", .body.message.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, body: ErrorBody },
    /// No response was received.
    #[error("no response received: {0}")]
    Connectivity(String),
    /// A success response whose body could not be decoded.
    #[error("unexpected response payload: {0}")]
    Decode(String),
    /// Network calls are only performed in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a `Rejected` error from a status code and raw response text.
    ///
    /// Bodies that do not follow the error contract keep an empty `ErrorBody`.
    pub fn from_response(status: u16, text: &str) -> Self {
        let body = serde_json::from_str::<ErrorBody>(text).unwrap_or_default();
        Self::Rejected { status, body }
    }

    /// Field-level errors reported by the server, if any.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Rejected { body, .. } => &body.errors,
            _ => &[],
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { body, .. } => body.message.as_deref(),
            _ => None,
        }
    }
}
