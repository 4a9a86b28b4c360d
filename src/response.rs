//! Uniform response envelope
//!
//! Every endpoint answers with `{status, code, data}` on success or
//! `{status, code, message}` on failure. The HTTP status line is always
//! 200 OK; callers read the outcome from `status` and `code`.

use crate::constants::response::INTERNAL_SERVER_ERROR_MESSAGE;
use crate::error::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`
    pub fn success(code: u16, data: T) -> Self {
        Self {
            status: true,
            code,
            data: Some(data),
            message: None,
        }
    }

    /// Failed envelope carrying a user-facing `message`
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: false,
            code,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Wrap the outcome of an upstream lookup
    ///
    /// Failures are logged with the call site and collapsed to a fixed 500
    /// message so no upstream detail reaches the caller.
    pub fn from_lookup(call_site: &str, result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::success(StatusCode::OK.as_u16(), data),
            Err(e) => {
                error!(call_site, error = %e, "Upstream lookup failed");
                Self::error(
                    StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    INTERNAL_SERVER_ERROR_MESSAGE,
                )
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
