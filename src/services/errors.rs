use crate::{db::dao::DaoLayerError, error::AppError};

#[derive(Clone, Copy, Debug)]
pub enum CrudOp {
    Create,
    Find,
    List,
    Update,
    Delete,
}

impl CrudOp {
    fn failed(self) -> &'static str {
        match self {
            CrudOp::Create => "Create failed",
            CrudOp::Find => "Find failed",
            CrudOp::List => "List failed",
            CrudOp::Update => "Update failed",
            CrudOp::Delete => "Delete failed",
        }
    }
}

/// Per-entity wording for the errors a service hands back to callers.
#[derive(Clone, Copy)]
pub struct CrudErrors {
    pub entity: &'static str,
    pub duplicate: &'static str,
}

impl CrudErrors {
    pub fn map(&self, op: CrudOp, err: DaoLayerError) -> AppError {
        if err.is_unique_violation() {
            return AppError::conflict(self.duplicate);
        }
        if err.is_foreign_key_violation() {
            return AppError::conflict(format!(
                "The {} conflicts with a related record",
                self.entity
            ));
        }

        match err {
            DaoLayerError::NotFound { id, .. } => {
                AppError::not_found(format!("No {} with id '{id}'", self.entity))
            }
            DaoLayerError::InvalidPagination { .. } => AppError::bad_request(err.to_string()),
            DaoLayerError::Db(db_err) => {
                tracing::error!(
                    entity = self.entity,
                    op = ?op,
                    error = %db_err,
                    "database operation failed"
                );
                AppError::internal(format!(
                    "{}. Please check the logs for more details",
                    op.failed()
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use uuid::Uuid;

    use super::{CrudErrors, CrudOp};

    const ERRORS: CrudErrors = CrudErrors {
        entity: "post",
        duplicate: "Post already exists",
    };

    #[test]
    fn not_found_names_the_missing_id() {
        let id = Uuid::nil();
        let err = ERRORS.map(
            CrudOp::Find,
            crate::db::dao::DaoLayerError::NotFound {
                entity: "Menu item",
                id,
            },
        );

        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.message(), format!("No post with id '{id}'"));
    }

    #[test]
    fn database_errors_hide_details() {
        let err = ERRORS.map(
            CrudOp::Delete,
            DbErr::Custom("connection reset".to_string()).into(),
        );

        assert_eq!(err.code(), "INTERNAL_SERVER_ERROR");
        assert_eq!(
            err.message(),
            "Delete failed. Please check the logs for more details"
        );
    }
}
