//! Input schemas for every procedure. Each one is checked with
//! `validator` before the service touches storage.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::db::dao::MenuItemDraft;

pub const DEFAULT_LIST_LIMIT: u64 = 50;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListMenuInput {
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u64>,
    pub cursor: Option<Uuid>,
}

impl ListMenuInput {
    pub fn limit_or_default(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemFields {
    #[validate(length(min = 1, max = 32, message = "Title must be between 1 and 32 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "Ingredients is required"))]
    pub ingredients: String,
    pub category_id: Uuid,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<MenuItemFields> for MenuItemDraft {
    fn from(fields: MenuItemFields) -> Self {
        Self {
            title: fields.title,
            text: fields.text,
            price: fields.price,
            ingredients: fields.ingredients,
            image_url: fields.image_url,
            category_id: fields.category_id,
        }
    }
}

/// `post.add`: the id is optional, one is generated when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMenuItemInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(flatten)]
    pub fields: MenuItemFields,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItemInput {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: MenuItemFields,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageUrlInput {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdInput {
    pub id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryNameInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryInput {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}
