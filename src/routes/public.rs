use axum::{Router, routing::get};

use crate::response::{ApiResult, JsonApiResponse};
use crate::routes::procedure_list::{ProcedureInfo, procedures};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/procedures.json", get(list_procedures_json))
}

async fn health() -> ApiResult<serde_json::Value> {
    JsonApiResponse::ok(serde_json::json!({ "ok": true }))
}

async fn list_procedures_json() -> ApiResult<&'static [ProcedureInfo]> {
    JsonApiResponse::ok(procedures())
}
