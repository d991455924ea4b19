//! Service layer: validates requests and orchestrates the store.
//!
//! Update and delete look the target up first and stop with
//! `ServiceError::NotFound` when it is missing, so repeating a delete
//! through the service fails even though the store's own delete does not.

mod validation;

pub use validation::*;

use thiserror::Error;
use tracing::warn;

use crate::db::{DbError, PatientStore};
use crate::models::{Patient, PatientInput};

/// Service errors.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("patient not found")]
    NotFound(i64),

    #[error("{0}")]
    Persistence(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Persistence(other.to_string()),
        }
    }
}

const INVALID_ID: &str = "invalid id";
const INVALID_NAME: &str = "invalid name";

/// Patient operations exposed to the transport layer.
pub trait PatientService: Send + Sync {
    fn insert(&self, patient: &PatientInput) -> ServiceResult<Patient>;
    fn get_by_id(&self, id: i64) -> ServiceResult<Patient>;
    fn get_all(&self) -> ServiceResult<Vec<Patient>>;
    fn update(&self, patient: &PatientInput, id: i64) -> ServiceResult<Patient>;
    fn delete(&self, id: i64) -> ServiceResult<()>;
}

/// Default service backed by any [`PatientStore`].
pub struct PatientSvc<S> {
    store: S,
}

impl<S: PatientStore> PatientSvc<S> {
    /// Create a new service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn check_id(id: i64) -> ServiceResult<()> {
        if valid_id(id) {
            Ok(())
        } else {
            warn!(id, "Rejected invalid patient id");
            Err(ServiceError::Validation(INVALID_ID))
        }
    }
}

impl<S: PatientStore> PatientService for PatientSvc<S> {
    fn insert(&self, patient: &PatientInput) -> ServiceResult<Patient> {
        if !validate_name(&patient.name) {
            warn!("Rejected patient with empty name");
            return Err(ServiceError::Validation(INVALID_NAME));
        }
        Ok(self.store.insert(patient)?)
    }

    fn get_by_id(&self, id: i64) -> ServiceResult<Patient> {
        Self::check_id(id)?;
        Ok(self.store.get_by_id(id)?)
    }

    fn get_all(&self) -> ServiceResult<Vec<Patient>> {
        Ok(self.store.get_all()?)
    }

    fn update(&self, patient: &PatientInput, id: i64) -> ServiceResult<Patient> {
        Self::check_id(id)?;
        self.store.get_by_id(id)?;
        Ok(self.store.update(patient, id)?)
    }

    fn delete(&self, id: i64) -> ServiceResult<()> {
        Self::check_id(id)?;
        self.store.get_by_id(id)?;
        Ok(self.store.delete(id)?)
    }
}
