//! Create handler.

use axum::{body::Bytes, extract::State, response::Response};
use ppms_core::PatientService;
use tracing::debug;

use super::decode_input;
use crate::error::ApiResult;
use crate::responses;
use crate::state::AppState;

/// Handler for `POST /patients`.
///
/// The body carries the mutable fields (`name`, `phone`, `discharge`,
/// `bloodGroup`, `description`); the store assigns the id and timestamps.
/// The body is read as JSON whatever `Content-Type` says.
///
/// # Example
///
/// ```http
/// POST /patients HTTP/1.1
/// Content-Type: application/json
///
/// {"name":"Zopsmart","phone":"+919172681679","discharge":true,"bloodGroup":"+A","description":"patient description"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> ApiResult<Response>
where
    S: PatientService + 'static,
{
    let input = decode_input(&body)?;
    let patient = state.run(move |svc| svc.insert(&input)).await?;
    debug!(id = patient.id, "Created patient");
    Ok(responses::patient(patient))
}
