//! Common test utilities for HTTP API testing.

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use ppms_core::{Patient, PatientInput, PatientService, ServiceError, ServiceResult};
use ppms_server::{ServerConfig, create_app, open_service};
use serde_json::{Value, json};

/// Creates a test server over a fresh in-memory database.
pub fn create_test_server() -> TestServer {
    let service = open_service(&ServerConfig::for_testing()).expect("Failed to open database");
    server_for(service)
}

/// Creates a test server over an arbitrary service.
pub fn server_for<S: PatientService + 'static>(service: S) -> TestServer {
    let app = create_app(service);
    TestServer::new(app).expect("Failed to create test server")
}

/// The canonical create payload.
pub fn zopsmart() -> Value {
    json!({
        "name": "Zopsmart",
        "phone": "+919172681679",
        "discharge": true,
        "bloodGroup": "+A",
        "description": "patient description"
    })
}

/// Creates a patient through the API and returns its id.
pub async fn seed_patient(server: &TestServer, body: &Value) -> i64 {
    let response = server.post("/patients").json(body).await;
    response.assert_status_ok();
    response.json::<Value>()["data"]["Patient"]["id"]
        .as_i64()
        .expect("created patient has an id")
}

/// A service whose every call fails with a storage error.
pub struct BrokenService;

impl BrokenService {
    fn broken<T>() -> ServiceResult<T> {
        Err(ServiceError::Persistence("database is locked".to_string()))
    }
}

impl PatientService for BrokenService {
    fn insert(&self, _patient: &PatientInput) -> ServiceResult<Patient> {
        Self::broken()
    }

    fn get_by_id(&self, _id: i64) -> ServiceResult<Patient> {
        Self::broken()
    }

    fn get_all(&self) -> ServiceResult<Vec<Patient>> {
        Self::broken()
    }

    fn update(&self, _patient: &PatientInput, _id: i64) -> ServiceResult<Patient> {
        Self::broken()
    }

    fn delete(&self, _id: i64) -> ServiceResult<()> {
        Self::broken()
    }
}

/// A service that answers with a fixed record, for wire-format checks.
pub struct FixedService;

impl FixedService {
    pub fn record(id: i64) -> Patient {
        let now = Utc::now();
        Patient {
            id,
            name: "Zopsmart".to_string(),
            phone: "+919172681679".to_string(),
            discharge: true,
            blood_group: "+A".to_string(),
            description: "patient description".to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl PatientService for FixedService {
    fn insert(&self, _patient: &PatientInput) -> ServiceResult<Patient> {
        Ok(Self::record(1))
    }

    fn get_by_id(&self, id: i64) -> ServiceResult<Patient> {
        Ok(Self::record(id))
    }

    fn get_all(&self) -> ServiceResult<Vec<Patient>> {
        Ok(vec![Self::record(1), Self::record(2)])
    }

    fn update(&self, _patient: &PatientInput, id: i64) -> ServiceResult<Patient> {
        Ok(Self::record(id))
    }

    fn delete(&self, _id: i64) -> ServiceResult<()> {
        Ok(())
    }
}
