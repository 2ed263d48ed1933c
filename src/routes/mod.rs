use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod category;
pub mod post;
pub mod procedure_list;
pub mod public;

pub const API_PREFIX: &str = "/api/trpc";

pub fn router(state: Arc<AppState>) -> Router {
    let procedures = Router::new()
        .merge(public::router())
        .merge(post::router(state.clone()))
        .merge(category::router(state));

    Router::new().nest(API_PREFIX, procedures)
}
