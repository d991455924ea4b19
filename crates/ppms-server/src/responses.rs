//! Response envelopes.
//!
//! Every response body is wrapped the same way:
//!
//! ```json
//! {"code": 200, "status": "Success", "data": {"Patient": {...}}}
//! {"code": 400, "status": "Error", "Message": "invalid id"}
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Confirmation returned in `data` after a successful delete.
pub const DELETED_MESSAGE: &str = "Patient deleted Successfully";

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    pub code: u16,
    pub status: &'static str,
    pub data: T,
}

/// Error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: u16,
    pub status: &'static str,
    #[serde(rename = "Message")]
    pub message: String,
}

/// Payload wrapper placing a patient (or list of patients) under `Patient`.
#[derive(Debug, Serialize)]
pub struct PatientData<T> {
    #[serde(rename = "Patient")]
    pub patient: T,
}

/// Builds a 200 response with `data` in a success envelope.
pub fn success<T: Serialize>(data: T) -> Response {
    let status = StatusCode::OK;
    (
        status,
        Json(SuccessEnvelope {
            code: status.as_u16(),
            status: "Success",
            data,
        }),
    )
        .into_response()
}

/// Builds a 200 response carrying a patient payload.
pub fn patient<T: Serialize>(patient: T) -> Response {
    success(PatientData { patient })
}

/// Builds an error response with the given status.
pub fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorEnvelope {
            code: status.as_u16(),
            status: "Error",
            message: message.into(),
        }),
    )
        .into_response()
}
