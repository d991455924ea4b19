//! Application state shared by all request handlers.

use std::sync::Arc;

use ppms_core::{PatientService, ServiceResult};

use crate::error::ApiResult;

/// Shared application state.
///
/// # Type Parameters
///
/// * `S` - The patient service (must implement [`PatientService`])
pub struct AppState<S> {
    service: Arc<S>,
}

// S sits behind an Arc, so it need not be Clone itself
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: PatientService + 'static> AppState<S> {
    /// Creates a new AppState around the given service.
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Runs a service call on the blocking thread pool.
    ///
    /// Service calls end in synchronous SQLite statements, so they stay off
    /// the async worker threads.
    pub async fn run<T, F>(&self, call: F) -> ApiResult<T>
    where
        F: FnOnce(&S) -> ServiceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let result = tokio::task::spawn_blocking(move || call(&service)).await?;
        Ok(result?)
    }
}
