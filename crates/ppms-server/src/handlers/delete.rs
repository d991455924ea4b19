//! Delete handler.

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

/// Handler for `DELETE /patients/{id}`.
///
/// Soft-deletes the record. Deleting the same id again answers 400, since
/// the record is no longer active.
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Response>
where
    S: PatientService + 'static,
{
    let id = path_id(path);
    debug!(id, "Processing delete request");

    state.run(move |svc| svc.delete(id)).await?;
    Ok(responses::success(responses::DELETED_MESSAGE))
}
