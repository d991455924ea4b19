//! Route configuration.

use axum::{Router, routing::get};
use ppms_core::PatientService;

use crate::handlers;
use crate::state::AppState;

/// Creates all patient routes.
///
/// - `GET /patients` - List
/// - `POST /patients` - Create
/// - `GET /patients/{id}` - Read
/// - `PUT /patients/{id}` - Update
/// - `DELETE /patients/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: PatientService + 'static,
{
    Router::new()
        .route(
            "/patients",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/patients/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .with_state(state)
}
