//! HTTP request handlers, one per patient operation.
//!
//! - [`read_handler`] - `GET /patients/{id}`
//! - [`list_handler`] - `GET /patients`
//! - [`create_handler`] - `POST /patients`
//! - [`update_handler`] - `PUT /patients/{id}`
//! - [`delete_handler`] - `DELETE /patients/{id}`

mod create;
mod delete;
mod read;
mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use read::{list_handler, read_handler};
pub use update::update_handler;

use axum::{
    body::Bytes,
    extract::{Path, rejection::PathRejection},
};
use ppms_core::PatientInput;

use crate::error::ApiResult;

/// Parses a path id. Anything that is not an integer becomes 0, which the
/// service then rejects as an invalid id.
pub(crate) fn parse_id(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

/// Resolves the `{id}` segment, treating an undecodable segment as id 0.
pub(crate) fn path_id(path: Result<Path<String>, PathRejection>) -> i64 {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(_) => 0,
    }
}

/// Decodes a patient body as JSON regardless of the request's content type.
pub(crate) fn decode_input(body: &Bytes) -> ApiResult<PatientInput> {
    Ok(serde_json::from_slice(body)?)
}
