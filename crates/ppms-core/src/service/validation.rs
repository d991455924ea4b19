//! Input validation applied before any store call.

/// A patient id is valid only when positive.
pub fn valid_id(id: i64) -> bool {
    id > 0
}

/// A patient name is valid when non-empty.
pub fn validate_name(name: &str) -> bool {
    !name.is_empty()
}
