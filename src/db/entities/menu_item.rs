use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// A dish on the menu. Deleting its category deletes it too, but that is
/// done by `CategoryDao::delete_with_items`, not by the schema.
#[base_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub price: f64,
    pub ingredients: String,
    pub image_url: Option<String>,
    #[sea_orm(indexed)]
    pub category_id: Uuid,
    #[sea_orm(belongs_to, from = "category_id", to = "id")]
    pub category: HasOne<super::category::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
