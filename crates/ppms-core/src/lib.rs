//! PPMS Core Library
//!
//! Patient records with soft-delete semantics over SQLite.
//!
//! # Architecture
//!
//! ```text
//! transport ──► PatientService (validation, existence checks)
//!                     │
//!                     ▼
//!               PatientStore (parameterized SQL, soft delete)
//!                     │
//!                     ▼
//!               SQLite `patient` table
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite schema, connection wrapper and the store trait
//! - [`models`]: Domain types (Patient, PatientInput)
//! - [`service`]: Validation and orchestration over a store

pub mod db;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use db::{Database, DbError, DbResult, PatientStore};
pub use models::{Patient, PatientInput};
pub use service::{PatientService, PatientSvc, ServiceError, ServiceResult};
