use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("Invalid pagination: limit={limit} (expected 1..={max})")]
    InvalidPagination { limit: u64, max: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            DaoLayerError::Db(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            DaoLayerError::Db(err) if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        )
    }
}
