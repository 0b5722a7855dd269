//! Error-to-response mapping.
//!
//! | Error              | Status |
//! |--------------------|--------|
//! | `InvalidAddress`   | 400    |
//! | `MalformedRequest` | 400    |
//! | `NotConfigured`    | 503    |
//! | `ExecutionFailed`  | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::sweep::SweepError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SweepError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SweepError::InvalidAddress(_) | SweepError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            SweepError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            SweepError::ExecutionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SweepError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = match &self {
            SweepError::ExecutionFailed(source) => Some(source.to_string()),
            _ => None,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, details = ?details, "Sweep failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Sweep rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
