//! Patient models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Store-assigned id, immutable after insert
    pub id: i64,
    /// Patient name (never empty)
    pub name: String,
    /// Contact phone, free-form
    pub phone: String,
    /// Whether the patient has been discharged
    pub discharge: bool,
    /// Blood group, free-form (e.g. "+A")
    pub blood_group: String,
    /// Free-text description
    pub description: String,
    /// Set once at insert
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `None` while the record is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Patient {
    /// Check if this record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// The mutable fields of a patient, as supplied by a client.
///
/// Missing fields decode to their zero value. Ids and timestamps are owned
/// by the store and are ignored if a client sends them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientInput {
    pub name: String,
    pub phone: String,
    pub discharge: bool,
    pub blood_group: String,
    pub description: String,
}

impl PatientInput {
    /// Create an input with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let now = Utc::now();
        let patient = Patient {
            id: 1,
            name: "Zopsmart".into(),
            phone: "+919172681679".into(),
            discharge: true,
            blood_group: "+A".into(),
            description: "patient description".into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["bloodGroup"], "+A");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        // Active records never expose the soft-delete marker
        assert!(json.get("deletedAt").is_none());
        assert!(!patient.is_deleted());
    }

    #[test]
    fn test_input_ignores_store_owned_fields() {
        let input: PatientInput = serde_json::from_str(
            r#"{"id": 42, "name": "Zopsmart", "bloodGroup": "+A", "createdAt": "2022-02-22T13:23:22Z"}"#,
        )
        .unwrap();

        assert_eq!(input.name, "Zopsmart");
        assert_eq!(input.blood_group, "+A");
        assert_eq!(input.phone, "");
        assert!(!input.discharge);
    }
}
