use uuid::Uuid;
use validator::Validate;

use crate::{
    db::dao::CategoryDao,
    db::entities::category,
    error::AppError,
    services::{
        errors::{CrudErrors, CrudOp},
        inputs::{CategoryNameInput, UpdateCategoryInput},
    },
};

const ERRORS: CrudErrors = CrudErrors {
    entity: "category",
    duplicate: "Category name already exists",
};

#[derive(Clone)]
pub struct CategoryService {
    dao: CategoryDao,
}

impl CategoryService {
    pub fn new(dao: CategoryDao) -> Self {
        Self { dao }
    }

    pub async fn list(&self) -> Result<Vec<category::Model>, AppError> {
        self.dao
            .list_all()
            .await
            .map_err(|err| ERRORS.map(CrudOp::List, err))
    }

    pub async fn create(&self, input: CategoryNameInput) -> Result<category::Model, AppError> {
        input.validate()?;
        let created = self
            .dao
            .create_category(&input.name)
            .await
            .map_err(|err| ERRORS.map(CrudOp::Create, err))?;
        tracing::info!(category_id = %created.id, name = %created.name, "category created");
        Ok(created)
    }

    pub async fn update(&self, input: UpdateCategoryInput) -> Result<category::Model, AppError> {
        input.validate()?;
        let updated = self
            .dao
            .rename(&input.id, &input.name)
            .await
            .map_err(|err| ERRORS.map(CrudOp::Update, err))?;
        tracing::info!(category_id = %updated.id, name = %updated.name, "category renamed");
        Ok(updated)
    }

    /// Removes the category together with its menu items.
    pub async fn delete(&self, id: &Uuid) -> Result<u64, AppError> {
        let removed_items = self
            .dao
            .delete_with_items(id)
            .await
            .map_err(|err| ERRORS.map(CrudOp::Delete, err))?;
        tracing::info!(category_id = %id, removed_items, "category deleted");
        Ok(removed_items)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use crate::db::entities::category;
    use crate::services::{
        ServiceContext,
        inputs::{CategoryNameInput, UpdateCategoryInput},
    };

    fn model(name: &str) -> category::Model {
        let ts = FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 2, 1, 9, 0, 0)
            .single()
            .expect("timestamp should be valid");
        category::Model {
            id: Uuid::new_v4(),
            created_at: ts,
            updated_at: ts,
            name: name.to_string(),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn create_rejects_empty_name_before_storage() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = ServiceContext::new(&db).category();

        let err = service
            .create(CategoryNameInput {
                name: String::new(),
            })
            .await
            .expect_err("empty name should fail");

        assert_eq!(err.code(), "BAD_REQUEST");
        assert_eq!(err.message(), "name: Name is required");
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn create_returns_stored_category() {
        let stored = model("Desserts");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let service = ServiceContext::new(&db).category();

        let created = service
            .create(CategoryNameInput {
                name: "Desserts".to_string(),
            })
            .await
            .expect("create should succeed");

        assert_eq!(created, stored);
    }

    #[tokio::test]
    async fn update_missing_category_is_not_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection();
        let service = ServiceContext::new(&db).category();

        let err = service
            .update(UpdateCategoryInput {
                id,
                name: "Drinks".to_string(),
            })
            .await
            .expect_err("category should be missing");

        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.message(), format!("No category with id '{id}'"));
    }

    #[tokio::test]
    async fn delete_reports_removed_items() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(3), exec(1)])
            .into_connection();
        let service = ServiceContext::new(&db).category();

        let removed = service
            .delete(&Uuid::new_v4())
            .await
            .expect("delete should succeed");
        assert_eq!(removed, 3);
    }

    #[tokio::test]
    async fn list_passes_categories_through() {
        let rows = vec![model("Pizza"), model("Drinks")];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows.clone()])
            .into_connection();
        let service = ServiceContext::new(&db).category();

        let listed = service.list().await.expect("list should succeed");
        assert_eq!(listed, rows);
    }
}
