use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult, MenuDao};
use crate::db::entities::category;
use crate::db::entities::prelude::Category;

#[derive(Clone)]
pub struct CategoryDao {
    db: DatabaseConnection,
}

impl DaoBase for CategoryDao {
    type Entity = Category;
    const ENTITY_NAME: &'static str = "Category";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl CategoryDao {
    fn menu_dao(&self) -> MenuDao {
        MenuDao::new(&self.db)
    }

    /// Every category, oldest first.
    pub async fn list_all(&self) -> DaoResult<Vec<category::Model>> {
        self.find_all(|query| query.order_by_asc(category::Column::CreatedAt))
            .await
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> DaoResult<Vec<category::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids = ids.to_vec();
        self.find_all(move |query| query.filter(category::Column::Id.is_in(ids)))
            .await
    }

    pub async fn create_category(&self, name: &str) -> DaoResult<category::Model> {
        let model = category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn rename(&self, id: &Uuid, name: &str) -> DaoResult<category::Model> {
        let name = name.to_string();
        self.update(*id, move |active| {
            active.name = Set(name);
        })
        .await
    }

    /// Deletes the category's menu items, then the category. The two
    /// statements do not share a transaction: if the second fails the
    /// category survives without items.
    pub async fn delete_with_items(&self, id: &Uuid) -> DaoResult<u64> {
        let removed_items = self.menu_dao().delete_by_category(id).await?;
        self.delete(*id).await?;
        Ok(removed_items)
    }
}
