use std::collections::HashMap;

use uuid::Uuid;
use validator::Validate;

use crate::{
    db::dao::{CategoryDao, DaoBase, MenuDao},
    db::entities::{category, menu_item},
    error::AppError,
    services::{
        errors::{CrudErrors, CrudOp},
        inputs::{AddMenuItemInput, ListMenuInput, UpdateImageUrlInput, UpdateMenuItemInput},
    },
};

const POST_ERRORS: CrudErrors = CrudErrors {
    entity: "post",
    duplicate: "A post with this id already exists",
};

const CATEGORY_ERRORS: CrudErrors = CrudErrors {
    entity: "category",
    duplicate: "Category already exists",
};

#[derive(Debug, Clone)]
pub struct MenuItemWithCategory {
    pub item: menu_item::Model,
    pub category: Option<category::Model>,
}

/// A page of the menu in display order (oldest first within the page).
#[derive(Debug, Clone)]
pub struct MenuPage {
    pub items: Vec<MenuItemWithCategory>,
    pub next_cursor: Option<Uuid>,
}

#[derive(Clone)]
pub struct MenuService {
    menu_dao: MenuDao,
    category_dao: CategoryDao,
}

impl MenuService {
    pub fn new(menu_dao: MenuDao, category_dao: CategoryDao) -> Self {
        Self {
            menu_dao,
            category_dao,
        }
    }

    pub async fn list(&self, input: ListMenuInput) -> Result<MenuPage, AppError> {
        input.validate()?;
        let page = self
            .menu_dao
            .list_page(input.cursor, input.limit_or_default())
            .await
            .map_err(|err| POST_ERRORS.map(CrudOp::List, err))?;

        let mut items = self.attach_categories(page.items).await?;
        items.reverse();

        Ok(MenuPage {
            items,
            next_cursor: page.next_cursor,
        })
    }

    pub async fn by_id(&self, id: &Uuid) -> Result<MenuItemWithCategory, AppError> {
        let item = self
            .menu_dao
            .find_by_id(*id)
            .await
            .map_err(|err| POST_ERRORS.map(CrudOp::Find, err))?;
        self.with_category(item).await
    }

    pub async fn add(&self, input: AddMenuItemInput) -> Result<MenuItemWithCategory, AppError> {
        input.fields.validate()?;
        self.require_category(&input.fields.category_id).await?;

        let item = self
            .menu_dao
            .create_item(input.id, input.fields.into())
            .await
            .map_err(|err| POST_ERRORS.map(CrudOp::Create, err))?;
        tracing::info!(item_id = %item.id, category_id = %item.category_id, "menu item created");

        self.with_category(item).await
    }

    pub async fn update(
        &self,
        input: UpdateMenuItemInput,
    ) -> Result<MenuItemWithCategory, AppError> {
        input.fields.validate()?;
        self.require_category(&input.fields.category_id).await?;

        let item = self
            .menu_dao
            .update_item(&input.id, input.fields.into())
            .await
            .map_err(|err| POST_ERRORS.map(CrudOp::Update, err))?;
        tracing::info!(item_id = %item.id, "menu item updated");

        self.with_category(item).await
    }

    pub async fn update_image_url(
        &self,
        input: UpdateImageUrlInput,
    ) -> Result<MenuItemWithCategory, AppError> {
        input.validate()?;
        let item = self
            .menu_dao
            .set_image_url(&input.id, &input.image_url)
            .await
            .map_err(|err| POST_ERRORS.map(CrudOp::Update, err))?;
        tracing::info!(item_id = %item.id, "menu item image updated");

        self.with_category(item).await
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        self.menu_dao
            .delete_item(id)
            .await
            .map_err(|err| POST_ERRORS.map(CrudOp::Delete, err))?;
        tracing::info!(item_id = %id, "menu item deleted");
        Ok(())
    }

    async fn require_category(&self, category_id: &Uuid) -> Result<(), AppError> {
        let exists = self
            .category_dao
            .exists(*category_id)
            .await
            .map_err(|err| CATEGORY_ERRORS.map(CrudOp::Find, err))?;
        if !exists {
            return Err(AppError::not_found(format!(
                "No category with id '{category_id}'"
            )));
        }
        Ok(())
    }

    async fn with_category(
        &self,
        item: menu_item::Model,
    ) -> Result<MenuItemWithCategory, AppError> {
        let mut attached = self.attach_categories(vec![item]).await?;
        attached
            .pop()
            .ok_or_else(|| AppError::internal("menu item vanished while loading its category"))
    }

    /// Loads the categories of `items` with one query and pairs them up.
    async fn attach_categories(
        &self,
        items: Vec<menu_item::Model>,
    ) -> Result<Vec<MenuItemWithCategory>, AppError> {
        let mut ids: Vec<Uuid> = items.iter().map(|item| item.category_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let categories: HashMap<Uuid, category::Model> = self
            .category_dao
            .find_by_ids(&ids)
            .await
            .map_err(|err| CATEGORY_ERRORS.map(CrudOp::List, err))?
            .into_iter()
            .map(|category| (category.id, category))
            .collect();

        Ok(items
            .into_iter()
            .map(|item| {
                let category = categories.get(&item.category_id).cloned();
                MenuItemWithCategory { item, category }
            })
            .collect())
    }
}
