use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
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
        category_service::CategoryService,
        inputs::{CategoryNameInput, IdInput, UpdateCategoryInput},
    },
    state::AppState,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/category.list", get(list))
        .route("/category.create", post(create))
        .route("/category.update", post(update))
        .route("/category.delete", post(delete))
        .with_state(state)
}

fn category_service(state: &AppState) -> CategoryService {
    ServiceContext::from_state(state).category()
}

async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Vec<CategoryResponse>> {
    let categories = category_service(&state).list().await?;
    JsonApiResponse::ok(categories.into_iter().map(CategoryResponse::from).collect())
}

async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CategoryNameInput>,
) -> ApiResult<CategoryResponse> {
    let created = category_service(&state).create(input).await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", created.into())
}

async fn update(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UpdateCategoryInput>,
) -> ApiResult<CategoryResponse> {
    let updated = category_service(&state).update(input).await?;
    JsonApiResponse::ok(updated.into())
}

async fn delete(
    State(state): State<Arc<AppState>>,
    Json(input): Json<IdInput>,
) -> ApiResult<()> {
    category_service(&state).delete(&input.id).await?;
    JsonApiResponse::with_status(StatusCode::OK, "deleted", ())
}
