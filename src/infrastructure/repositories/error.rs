use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// Constraint violations other than NOT NULL/CHECK surface as persistence
/// failures; nothing a client sends can trigger them.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
