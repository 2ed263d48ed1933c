use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::entities::category,
    response::{ApiResult, JsonApiResponse},
    services::{
        ServiceContext,
        inputs::{
            AddMenuItemInput, IdInput, ListMenuInput, UpdateImageUrlInput, UpdateMenuItemInput,
        },
        menu_service::{MenuItemWithCategory, MenuPage, MenuService},
    },
    state::AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub price: f64,
    pub ingredients: String,
    pub image_url: Option<String>,
    pub category_id: Uuid,
    pub category: Option<CategorySummary>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPageResponse {
    pub items: Vec<MenuItemResponse>,
    pub next_cursor: Option<Uuid>,
}

impl From<category::Model> for CategorySummary {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<MenuItemWithCategory> for MenuItemResponse {
    fn from(row: MenuItemWithCategory) -> Self {
        let MenuItemWithCategory { item, category } = row;
        Self {
            id: item.id,
            title: item.title,
            text: item.text,
            price: item.price,
            ingredients: item.ingredients,
            image_url: item.image_url,
            category_id: item.category_id,
            category: category.map(CategorySummary::from),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<MenuPage> for MenuPageResponse {
    fn from(page: MenuPage) -> Self {
        Self {
            items: page.items.into_iter().map(MenuItemResponse::from).collect(),
            next_cursor: page.next_cursor,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/post.list", get(list))
        .route("/post.byId", get(by_id))
        .route("/post.add", post(add))
        .route("/post.update", post(update))
        .route("/post.updateImageUrl", post(update_image_url))
        .route("/post.delete", post(delete))
        .with_state(state)
}

fn menu_service(state: &AppState) -> MenuService {
    ServiceContext::from_state(state).menu()
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(input): Query<ListMenuInput>,
) -> ApiResult<MenuPageResponse> {
    let page = menu_service(&state).list(input).await?;
    JsonApiResponse::ok(page.into())
}

async fn by_id(
    State(state): State<Arc<AppState>>,
    Query(input): Query<IdInput>,
) -> ApiResult<MenuItemResponse> {
    let item = menu_service(&state).by_id(&input.id).await?;
    JsonApiResponse::ok(item.into())
}

async fn add(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AddMenuItemInput>,
) -> ApiResult<MenuItemResponse> {
    let item = menu_service(&state).add(input).await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", item.into())
}

async fn update(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UpdateMenuItemInput>,
) -> ApiResult<MenuItemResponse> {
    let item = menu_service(&state).update(input).await?;
    JsonApiResponse::ok(item.into())
}

async fn update_image_url(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UpdateImageUrlInput>,
) -> ApiResult<MenuItemResponse> {
    let item = menu_service(&state).update_image_url(input).await?;
    JsonApiResponse::ok(item.into())
}

async fn delete(
    State(state): State<Arc<AppState>>,
    Json(input): Json<IdInput>,
) -> ApiResult<()> {
    menu_service(&state).delete(&input.id).await?;
    JsonApiResponse::with_status(StatusCode::OK, "deleted", ())
}
