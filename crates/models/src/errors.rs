use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => ModelError::Conflict(detail),
            _ => ModelError::Db(e.to_string()),
        }
    }
}

/// Outcome of an update issued after a successful lookup. `RecordNotUpdated`
/// means the row was deleted in between, which callers treat as absent.
pub fn updated_or_gone<T>(
    res: Result<T, DbErr>,
    classify: impl FnOnce(DbErr) -> ModelError,
) -> Result<Option<T>, ModelError> {
    match res {
        Ok(row) => Ok(Some(row)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(classify(e)),
    }
}

/// Reject blank values for columns that must carry text.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
