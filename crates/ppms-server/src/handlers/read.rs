//! Read and list handlers.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Response,
};
use ppms_core::PatientService;
use tracing::debug;

use super::path_id;
use crate::error::ApiResult;
use crate::responses;
use crate::state::AppState;

/// Handler for `GET /patients/{id}`.
///
/// # Response
///
/// - `200 OK` - `data.Patient` holds the active record
/// - `400 Bad Request` - invalid id, or no active record with that id
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Response>
where
    S: PatientService + 'static,
{
    let id = path_id(path);
    debug!(id, "Processing read request");

    let patient = state.run(move |svc| svc.get_by_id(id)).await?;
    Ok(responses::patient(patient))
}

/// Handler for `GET /patients`.
///
/// Returns every active record; an empty table yields `data.Patient: []`.
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> ApiResult<Response>
where
    S: PatientService + 'static,
{
    let patients = state.run(|svc| svc.get_all()).await?;
    debug!(count = patients.len(), "Returning patient list");
    Ok(responses::patient(patients))
}
