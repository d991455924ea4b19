//! Patient database operations.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{Database, DbError, DbResult, PatientStore, PATIENT_COLUMNS};
use crate::models::{Patient, PatientInput};

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        discharge: row.get(3)?,
        blood_group: row.get(4)?,
        description: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
        deleted_at: row.get(8)?,
    })
}

impl PatientStore for Database {
    fn insert(&self, patient: &PatientInput) -> DbResult<Patient> {
        let id = {
            let conn = self.conn()?;
            let now = Utc::now();
            conn.execute(
                r#"
                INSERT INTO patient (
                    name, phone, discharge, bloodgroup, description, createdat, udatedat
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    patient.name,
                    patient.phone,
                    patient.discharge,
                    patient.blood_group,
                    patient.description,
                    now,
                    now,
                ],
            )?;
            conn.last_insert_rowid()
        };
        debug!(id, "Inserted patient");

        self.get_by_id(id)
    }

    fn get_by_id(&self, id: i64) -> DbResult<Patient> {
        let conn = self.conn()?;
        let patient = conn
            .query_row(
                &format!(
                    "SELECT {} FROM patient WHERE deletedat IS NULL AND id = ?1",
                    PATIENT_COLUMNS
                ),
                [id],
                patient_from_row,
            )
            .optional()?;
        patient.ok_or(DbError::NotFound(id))
    }

    fn get_all(&self) -> DbResult<Vec<Patient>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM patient WHERE deletedat IS NULL ORDER BY id",
            PATIENT_COLUMNS
        ))?;

        let rows = stmt.query_map([], patient_from_row)?;
        let patients = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(count = patients.len(), "Listed active patients");
        Ok(patients)
    }

    fn update(&self, patient: &PatientInput, id: i64) -> DbResult<Patient> {
        {
            let conn = self.conn()?;
            let rows_affected = conn.execute(
                r#"
                UPDATE patient SET
                    name = ?1,
                    phone = ?2,
                    discharge = ?3,
                    udatedat = ?4,
                    bloodgroup = ?5,
                    description = ?6
                WHERE deletedat IS NULL AND id = ?7
                "#,
                params![
                    patient.name,
                    patient.phone,
                    patient.discharge,
                    Utc::now(),
                    patient.blood_group,
                    patient.description,
                    id,
                ],
            )?;
            debug!(id, rows_affected, "Updated patient");
        }

        self.get_by_id(id)
    }

    fn delete(&self, id: i64) -> DbResult<()> {
        let rows_affected = self.conn()?.execute(
            "UPDATE patient SET deletedat = ?1 WHERE id = ?2 AND deletedat IS NULL",
            params![Utc::now(), id],
        )?;
        debug!(id, rows_affected, "Soft-deleted patient");
        Ok(())
    }
}
