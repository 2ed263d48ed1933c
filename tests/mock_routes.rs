use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use menu_server::{routes::API_PREFIX, test_helpers::mock_router};

fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

async fn json_response(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("body should be json");
    (status, json)
}

fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(api_path(path))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(api_path(path))
        .body(Body::empty())
        .unwrap()
}

fn menu_item(title: &str, price: f64) -> serde_json::Value {
    json!({
        "title": title,
        "text": "Stone baked",
        "price": price,
        "ingredients": "ingredient1, ingredient2",
        "categoryId": Uuid::new_v4(),
    })
}

// The mock database has no queued results: any query would surface as a 500.

#[tokio::test]
async fn add_rejects_negative_price_without_touching_db() {
    let (status, json) =
        json_response(mock_router(), post_json("/post.add", menu_item("Marinara", -2.0))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["message"], "price: Price must not be negative");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn add_rejects_33_character_title_without_touching_db() {
    let (status, json) = json_response(
        mock_router(),
        post_json("/post.add", menu_item(&"a".repeat(33), 4.0)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "title: Title must be between 1 and 32 characters"
    );
}

#[tokio::test]
async fn update_applies_the_same_validation_as_add() {
    let mut body = menu_item("Capricciosa", 9.0);
    body["id"] = json!(Uuid::new_v4());
    body["ingredients"] = json!("");

    let (status, json) = json_response(mock_router(), post_json("/post.update", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "ingredients: Ingredients is required");
}

#[tokio::test]
async fn list_rejects_out_of_range_limits() {
    for limit in [0, 101] {
        let (status, json) =
            json_response(mock_router(), get(&format!("/post.list?limit={limit}"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "limit {limit}");
        assert_eq!(json["message"], "limit: Limit must be between 1 and 100");
    }
}

#[tokio::test]
async fn malformed_query_is_rewritten_into_envelope() {
    let (status, json) = json_response(mock_router(), get("/post.byId?id=not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().is_some());
}

#[tokio::test]
async fn malformed_json_body_is_rewritten_into_envelope() {
    let request = Request::builder()
        .method("POST")
        .uri(api_path("/category.create"))
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, json) = json_response(mock_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_category_rejects_empty_name() {
    let (status, json) =
        json_response(mock_router(), post_json("/category.create", json!({ "name": "" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "name: Name is required");
}

#[tokio::test]
async fn unknown_procedure_is_not_found_envelope() {
    let (status, json) = json_response(mock_router(), get("/post.missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, json) = json_response(mock_router(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["ok"], true);
    assert!(json.get("code").is_none());
}

#[tokio::test]
async fn procedure_index_lists_queries_and_mutations() {
    let (status, json) = json_response(mock_router(), get("/procedures.json")).await;

    assert_eq!(status, StatusCode::OK);
    let procedures = json["data"].as_array().expect("procedures should be an array");
    let find = |name: &str| {
        procedures
            .iter()
            .find(|entry| entry["name"] == name)
            .unwrap_or_else(|| panic!("{name} should be listed"))
    };

    assert_eq!(find("post.list")["kind"], "query");
    assert_eq!(find("post.list")["method"], "GET");
    assert_eq!(find("post.add")["kind"], "mutation");
    assert_eq!(find("category.delete")["method"], "POST");
    assert_eq!(find("post.updateImageUrl")["source"], "src/routes/post.rs");
}
