//! Integration tests for the menu REST API
//!
//! These drive the full router: listing and filtering, adding, dish details,
//! removal and the per-course averages.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use menu_service_rust::menu::{AppState, MenuStore};
use menu_service_rust::router::create_app_router;

fn create_test_app() -> axum::Router {
    create_app_router(Arc::new(AppState::seeded()))
}

/// Helper function to send a request and get the status and JSON body back
async fn send_rest_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, body)
}

fn dish_ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_menu_returns_sample_in_order() {
    let app = create_test_app();

    let (status, body) = send_rest_request(&app, "GET", "/menu", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dish_ids(&body), ["1", "2", "3", "4", "5"]);
    assert_eq!(body[0]["dishName"], "Caprese Salad");
    assert_eq!(body[0]["price"], "85.50");
}

#[tokio::test]
async fn test_filter_by_course() {
    let app = create_test_app();

    let (status, body) = send_rest_request(&app, "GET", "/menu?course=Starter", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dish_ids(&body), ["1", "5"]);

    let (_, all) = send_rest_request(&app, "GET", "/menu?course=all", None).await;
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_filter_unknown_course_is_rejected() {
    let app = create_test_app();

    let (status, body) = send_rest_request(&app, "GET", "/menu?course=Brunch", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_course");
}

#[tokio::test]
async fn test_filter_course_without_dishes_is_empty() {
    let app = create_app_router(Arc::new(AppState::with_store(MenuStore::new())));

    let (status, body) = send_rest_request(&app, "GET", "/menu?course=Dessert", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_add_then_get_round_trips() {
    let app = create_test_app();

    let (status, created) = send_rest_request(
        &app,
        "POST",
        "/menu",
        Some(json!({
            "dishName": "Soup",
            "description": "",
            "course": "Starter",
            "price": "10.00"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = send_rest_request(&app, "GET", &format!("/menu/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, menu) = send_rest_request(&app, "GET", "/menu", None).await;
    assert_eq!(dish_ids(&menu)[0], id);
}

#[tokio::test]
async fn test_add_rejects_invalid_price() {
    let app = create_test_app();

    let (status, body) = send_rest_request(
        &app,
        "POST",
        "/menu",
        Some(json!({ "dishName": "Water", "course": "Beverage", "price": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_price");

    let (_, menu) = send_rest_request(&app, "GET", "/menu", None).await;
    assert_eq!(menu.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_averages_reflect_additions() {
    let app = create_test_app();

    let (status, before) = send_rest_request(&app, "GET", "/menu/averages", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(before[0], json!({ "course": "Starter", "averagePrice": "102.75" }));

    send_rest_request(
        &app,
        "POST",
        "/menu",
        Some(json!({ "dishName": "Soup", "course": "Starter", "price": 10 })),
    )
    .await;

    let (_, after) = send_rest_request(&app, "GET", "/menu/averages", None).await;
    assert_eq!(after[0], json!({ "course": "Starter", "averagePrice": "71.83" }));
}

#[tokio::test]
async fn test_stats_report_item_count_with_averages() {
    let app = create_test_app();

    let (status, body) = send_rest_request(&app, "GET", "/menu/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalItems"], 5);
    assert_eq!(
        body["averages"][0],
        json!({ "course": "Starter", "averagePrice": "102.75" })
    );

    send_rest_request(&app, "DELETE", "/menu/1", None).await;
    let (_, after) = send_rest_request(&app, "GET", "/menu/stats", None).await;
    assert_eq!(after["totalItems"], 4);
}

#[tokio::test]
async fn test_add_rejects_price_beyond_cap() {
    let app = create_test_app();

    let (status, body) = send_rest_request(
        &app,
        "POST",
        "/menu",
        Some(json!({
            "dishName": "Gold Leaf",
            "course": "Dessert",
            "price": "79228162514264337593543950335"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_price");

    let (_, menu) = send_rest_request(&app, "GET", "/menu", None).await;
    assert_eq!(menu.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_averages_of_empty_menu() {
    let app = create_app_router(Arc::new(AppState::new()));

    let (status, body) = send_rest_request(&app, "GET", "/menu/averages", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = create_test_app();

    let (first, _) = send_rest_request(&app, "DELETE", "/menu/3", None).await;
    let (second, _) = send_rest_request(&app, "DELETE", "/menu/3", None).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NO_CONTENT);

    let (_, menu) = send_rest_request(&app, "GET", "/menu", None).await;
    assert_eq!(dish_ids(&menu), ["1", "2", "4", "5"]);
}

#[tokio::test]
async fn test_get_removed_dish_is_not_found() {
    let app = create_test_app();

    send_rest_request(&app, "DELETE", "/menu/1", None).await;
    let (status, body) = send_rest_request(&app, "GET", "/menu/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "dish_not_found");
    assert_eq!(body["message"], "no dish with id '1'");
}
