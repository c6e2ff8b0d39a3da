//! Success and error envelopes shared by every endpoint.
//!
//! The dashboard checks the `success` flag before touching the payload, so
//! all bodies use one of these two wrappers.

use serde::Serialize;

use crate::router::RouterError;

/// Body of a successful response: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

/// Body of a failed response: `{ "success": false, "error": ... }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ApiError,
}

/// Error payload carried by [`ErrorResponse`].
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// HTTP status code as a string
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Wraps `data` in the success envelope.
pub fn success_response<T: Serialize>(data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        data,
    }
}

/// Builds the error envelope for a status code.
pub fn error_response(code: u16, message: String, details: Option<String>) -> ErrorResponse {
    ErrorResponse {
        success: false,
        error: ApiError {
            code: code.to_string(),
            message,
            details,
        },
    }
}

/// Serializes `data` inside the success envelope, honoring the `pretty` flag.
pub fn serialize_success<T: Serialize>(data: T, pretty: bool) -> Result<Vec<u8>, RouterError> {
    let envelope = success_response(data);
    let result = if pretty {
        serde_json::to_vec_pretty(&envelope)
    } else {
        serde_json::to_vec(&envelope)
    };
    result.map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))
}
