//! PPMS HTTP API
//!
//! Axum front end over [`ppms_core::PatientService`].
//!
//! # Modules
//!
//! - [`config`] - Server configuration (flags and environment)
//! - [`error`] - Handler error type and its 400 rendering
//! - [`handlers`] - One handler per patient operation
//! - [`responses`] - Success and error envelopes
//! - [`routing`] - Route table
//! - [`state`] - Shared application state

pub mod config;
pub mod error;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use ppms_core::{Database, DbResult, PatientService, PatientSvc};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the application around the given service, wrapped in request
/// tracing middleware.
pub fn create_app<S>(service: S) -> Router
where
    S: PatientService + 'static,
{
    let state = AppState::new(Arc::new(service));
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new().layer(TraceLayer::new_for_http());

    router.layer(service_builder)
}

/// Opens the SQLite database named by the configuration and wraps it in
/// the default service.
pub fn open_service(config: &ServerConfig) -> DbResult<PatientSvc<Database>> {
    let db = if config.is_in_memory() {
        info!("Opening in-memory database");
        Database::open_in_memory()?
    } else {
        info!(database = %config.database_url, "Opening SQLite database");
        Database::open(&config.database_url)?
    };
    Ok(PatientSvc::new(db))
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG`, when set,
/// takes precedence over `level`.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ppms_server={level},ppms_core={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
