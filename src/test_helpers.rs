use std::sync::Arc;

use axum::{Router, middleware};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    state::AppState,
};

/// Full router, middleware included, over the given connection.
pub fn test_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(AppConfig::default(), db);
    router(Arc::clone(&state))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}

/// Router over a mock database with no queued results.
pub fn mock_router() -> Router {
    test_router(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

/// Router over a fresh in-memory SQLite database with the schema synced.
pub async fn sqlite_router() -> anyhow::Result<Router> {
    let db = connection::connect(&DatabaseConfig::sqlite_memory()).await?;
    Ok(test_router(db))
}
