use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::{CursorPage, DaoBase, DaoResult};
use crate::db::entities::menu_item;
use crate::db::entities::prelude::MenuItem;

#[derive(Clone)]
pub struct MenuDao {
    db: DatabaseConnection,
}

impl DaoBase for MenuDao {
    type Entity = MenuItem;
    const ENTITY_NAME: &'static str = "Menu item";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Column values of a menu item, already validated by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDraft {
    pub title: String,
    pub text: String,
    pub price: f64,
    pub ingredients: String,
    pub image_url: Option<String>,
    pub category_id: Uuid,
}

impl MenuItemDraft {
    fn apply(self, active: &mut menu_item::ActiveModel) {
        active.title = Set(self.title);
        active.text = Set(self.text);
        active.price = Set(self.price);
        active.ingredients = Set(self.ingredients);
        active.image_url = Set(self.image_url);
        active.category_id = Set(self.category_id);
    }
}

impl MenuDao {
    pub async fn list_page(
        &self,
        cursor: Option<Uuid>,
        limit: u64,
    ) -> DaoResult<CursorPage<menu_item::Model>> {
        self.find_page(cursor, limit, |query| query).await
    }

    pub async fn create_item(
        &self,
        id: Option<Uuid>,
        draft: MenuItemDraft,
    ) -> DaoResult<menu_item::Model> {
        let mut active = menu_item::ActiveModel::default();
        if let Some(id) = id {
            active.id = Set(id);
        }
        draft.apply(&mut active);
        self.create(active).await
    }

    pub async fn update_item(
        &self,
        id: &Uuid,
        draft: MenuItemDraft,
    ) -> DaoResult<menu_item::Model> {
        self.update(*id, move |active| draft.apply(active)).await
    }

    pub async fn set_image_url(&self, id: &Uuid, image_url: &str) -> DaoResult<menu_item::Model> {
        let image_url = image_url.to_string();
        self.update(*id, move |active| {
            active.image_url = Set(Some(image_url));
        })
        .await
    }

    pub async fn delete_item(&self, id: &Uuid) -> DaoResult<Uuid> {
        self.delete(*id).await
    }

    /// Removes every item of a category, returning how many were deleted.
    pub async fn delete_by_category(&self, category_id: &Uuid) -> DaoResult<u64> {
        let result = MenuItem::delete_many()
            .filter(menu_item::Column::CategoryId.eq(*category_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
