//! Error handling utilities for repositories

use interaction_core::error::DomainError;
use sqlx::Error as SqlxError;

/// PostgreSQL SQLSTATE for `undefined_table`
pub const UNDEFINED_TABLE: &str = "42P01";

/// Convert SQLx error to DomainError
///
/// Unique violations become `ConstraintViolation` so the use case can resolve
/// the race; a missing table becomes `StorageUnavailable` so the API can
/// degrade instead of failing.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::ConstraintViolation;
        }
        if db_err.code().as_deref() == Some(UNDEFINED_TABLE) {
            return DomainError::StorageUnavailable(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}
