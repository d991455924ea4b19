//! SQLite schema definition.

/// Complete database schema for the patient records store.
///
/// Column names follow the legacy `patient` table, including the
/// `udatedat` spelling, so existing databases can be opened unchanged.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Patients (soft-deleted rows keep their id; deletedat marks them inactive)
-- ============================================================================

CREATE TABLE IF NOT EXISTS patient (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    phone TEXT NOT NULL DEFAULT '',
    discharge INTEGER NOT NULL DEFAULT 0,
    createdat TEXT NOT NULL,
    udatedat TEXT NOT NULL,
    bloodgroup TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    deletedat TEXT                               -- NULL while active
);

CREATE INDEX IF NOT EXISTS idx_patient_deletedat ON patient(deletedat);
"#;

/// Columns selected for every patient read, in `Patient` field order.
pub(crate) const PATIENT_COLUMNS: &str =
    "id, name, phone, discharge, bloodgroup, description, createdat, udatedat, deletedat";
