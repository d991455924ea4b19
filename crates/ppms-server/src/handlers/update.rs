//! Update handler.

use axum::{
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    response::Response,
};
use ppms_core::PatientService;
use tracing::debug;

use super::{decode_input, path_id};
use crate::error::ApiResult;
use crate::responses;
use crate::state::AppState;

/// Handler for `PUT /patients/{id}`.
///
/// Replaces all mutable fields of an active record and returns it with a
/// refreshed `updatedAt`. A missing or deleted target fails without a write.
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<Response>
where
    S: PatientService + 'static,
{
    let id = path_id(path);
    let input = decode_input(&body)?;
    debug!(id, "Processing update request");

    let patient = state.run(move |svc| svc.update(&input, id)).await?;
    Ok(responses::patient(patient))
}
