//! End-to-end API tests against the in-memory database

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use admin_server::api::create_router;
use admin_server::core::{Config, ServerState};

async fn test_app() -> Router {
    let config = Config::with_overrides("/tmp/admin-server-test", 0);
    let state = ServerState::initialize_in_memory(&config)
        .await
        .expect("in-memory state");
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn kottu_payload() -> Value {
    json!({
        "name": "Chicken Kottu",
        "category": "Main",
        "price": 500.0,
        "dietary": "Non-Vegetarian",
        "spice_level": 3,
        "rating": 4.5,
        "ingredients": ["roti", "chicken", "egg"]
    })
}

async fn create_food(app: &Router, payload: Value) -> String {
    let (status, body) = send(app, "POST", "/api/foods", Some(payload)).await;
    assert_eq!(status, StatusCode::OK, "create food failed: {body}");
    body["data"]["id"].as_str().unwrap().to_string()
}

// ============================================================================
// Foods
// ============================================================================

#[tokio::test]
async fn food_crud_roundtrip() {
    let app = test_app().await;

    let id = create_food(&app, kottu_payload()).await;
    assert!(id.starts_with("food:"), "unexpected id: {id}");

    let (status, body) = send(&app, "GET", &format!("/api/foods/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Chicken Kottu");
    assert_eq!(body["data"]["availability"], true);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/foods/{id}"),
        Some(json!({"price": 550.0, "availability": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 550.0);
    assert_eq!(body["data"]["availability"], false);
    // Untouched fields survive the merge
    assert_eq!(body["data"]["name"], "Chicken Kottu");

    let (status, _) = send(&app, "DELETE", &format!("/api/foods/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/api/foods/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn food_with_zero_price_is_rejected_before_any_write() {
    let app = test_app().await;

    let mut payload = kottu_payload();
    payload["price"] = json!(0.0);

    let (status, body) = send(&app, "POST", "/api/foods", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert!(body["message"].as_str().unwrap().contains("price"));

    // Nothing was written
    let (_, body) = send(&app, "GET", "/api/foods", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn food_with_unknown_category_in_body_is_rejected_as_validation() {
    let app = test_app().await;

    let mut payload = kottu_payload();
    payload["category"] = json!("Drinks");

    // Enum failures in the body get the same envelope as field failures
    let (status, body) = send(&app, "POST", "/api/foods", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
    assert!(body["message"].as_str().unwrap().contains("category"));

    // Nothing was written
    let (_, body) = send(&app, "GET", "/api/foods", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn order_with_unknown_status_in_body_is_rejected_as_validation() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_number": 1,
            "items": [{"food_id": "food:a", "quantity": 1}],
            "status": "Delivered"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, body) = send(
        &app,
        "PUT",
        "/api/orders/order:missing",
        Some(json!({"status": "Delivered"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn food_with_out_of_range_rating_is_rejected() {
    let app = test_app().await;

    let mut payload = kottu_payload();
    payload["rating"] = json!(5.5);

    let (status, body) = send(&app, "POST", "/api/foods", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn food_list_filters_are_and_combined() {
    let app = test_app().await;

    create_food(&app, kottu_payload()).await;
    create_food(
        &app,
        json!({
            "name": "Vegetable Roti",
            "category": "Side",
            "price": 150.0,
            "dietary": "Vegan"
        }),
    )
    .await;
    create_food(
        &app,
        json!({
            "name": "Milk Rice",
            "category": "Breakfast",
            "price": 200.0,
            "dietary": "Vegetarian",
            "availability": false
        }),
    )
    .await;

    // No criteria: full collection
    let (_, body) = send(&app, "GET", "/api/foods", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // Case-insensitive substring search
    let (_, body) = send(&app, "GET", "/api/foods?search=roti", None).await;
    let foods = body["data"].as_array().unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0]["name"], "Vegetable Roti");

    // Enum + availability, AND-combined
    let (_, body) = send(
        &app,
        "GET",
        "/api/foods?dietary=Vegetarian&available=true",
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // Unknown enum value is a 400, not an empty result
    let (status, body) = send(&app, "GET", "/api/foods?category=Drinks", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");
}

#[tokio::test]
async fn food_id_for_wrong_table_is_invalid() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/foods/order:abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn order_detail_prices_against_current_menu() {
    let app = test_app().await;

    let food_id = create_food(&app, kottu_payload()).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_number": 4,
            "items": [{"food_id": food_id, "quantity": 2}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create order failed: {body}");
    let order_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["status"], "Pending");

    let (status, body) = send(&app, "GET", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let totals = &body["data"]["totals"];
    assert_eq!(totals["subtotal"], 1000.0);
    assert_eq!(totals["tax"], 100.0);
    assert_eq!(totals["total"], 1100.0);
    assert_eq!(totals["lines"][0]["name"], "Chicken Kottu");
}

#[tokio::test]
async fn deleted_food_degrades_to_unknown_item() {
    let app = test_app().await;

    let food_id = create_food(&app, kottu_payload()).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_number": 2,
            "items": [{"food_id": food_id, "quantity": 3}]
        })),
    )
    .await;
    let order_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "DELETE", &format!("/api/foods/{food_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let totals = &body["data"]["totals"];
    assert_eq!(totals["lines"][0]["name"], "Unknown Item");
    assert_eq!(totals["lines"][0]["line_total"], 0.0);
    assert_eq!(totals["subtotal"], 0.0);
    assert_eq!(totals["total"], 0.0);
}

#[tokio::test]
async fn order_with_unselected_item_is_rejected_before_any_write() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_number": 1,
            "items": [{"food_id": "", "quantity": 1}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (_, body) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn order_with_invalid_table_or_quantity_is_rejected() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_number": 0,
            "items": [{"food_id": "food:a", "quantity": 1}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_number": 3,
            "items": [{"food_id": "food:a", "quantity": 0}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({"table_number": 3, "items": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cancelling_keeps_the_order_deleting_removes_it() {
    let app = test_app().await;

    let food_id = create_food(&app, kottu_payload()).await;
    let (_, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "table_number": 6,
            "items": [{"food_id": food_id, "quantity": 1}]
        })),
    )
    .await;
    let order_id = body["data"]["id"].as_str().unwrap().to_string();

    // Soft-cancel: the record stays, status flips
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}"),
        Some(json!({"status": "Cancelled"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Cancelled");

    let (status, body) = send(&app, "GET", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Cancelled");

    // Hard delete is its own operation
    let (status, _) = send(&app, "DELETE", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/api/orders/{order_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn order_list_filters_by_status_and_table() {
    let app = test_app().await;

    let food_id = create_food(&app, kottu_payload()).await;
    for (table, status) in [(1, "Pending"), (12, "Completed"), (3, "Pending")] {
        let (code, body) = send(
            &app,
            "POST",
            "/api/orders",
            Some(json!({
                "table_number": table,
                "items": [{"food_id": food_id, "quantity": 1}],
                "status": status
            })),
        )
        .await;
        assert_eq!(code, StatusCode::OK, "create order failed: {body}");
    }

    let (_, body) = send(&app, "GET", "/api/orders?status=Pending", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/orders?table=1", None).await;
    // Tables 1 and 12 both contain the digit 1
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/orders?status=Pending&table=3", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, "GET", "/api/orders?status=Cancelled", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

// ============================================================================
// Statistics & health
// ============================================================================

#[tokio::test]
async fn statistics_reflect_orders() {
    let app = test_app().await;

    let food_id = create_food(&app, kottu_payload()).await;
    for (table, status) in [(1, "Completed"), (2, "Pending"), (2, "Cancelled")] {
        send(
            &app,
            "POST",
            "/api/orders",
            Some(json!({
                "table_number": table,
                "items": [{"food_id": food_id, "quantity": 2}],
                "status": status
            })),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/api/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    let overview = &body["data"]["overview"];
    assert_eq!(overview["total_orders"], 3);
    // Two billed orders at 500 * 2 * 1.1 each
    assert_eq!(overview["total_revenue"], 2200.0);
    assert_eq!(overview["avg_order_value"], 1100.0);
    assert_eq!(overview["active_tables"], 1);
    assert_eq!(body["data"]["status_counts"]["Cancelled"], 1);
    assert_eq!(body["data"]["top_items"][0]["name"], "Chicken Kottu");
}

#[tokio::test]
async fn health_reports_database_status() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn config_exposes_currency_and_tax_rate() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/config", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "E0000");
    assert_eq!(body["data"]["currency"], "LKR");
    assert_eq!(body["data"]["tax_rate"], 0.1);
}
