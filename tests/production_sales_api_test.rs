mod common;

use axum::http::StatusCode;
use common::{response_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn production_create_list_delete() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/api/production",
            json!({
                "raw_material": "Paddy",
                "raw_quantity": 100.0,
                "finished_product": "White Rice",
                "finished_quantity": 65.0
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let record = response_json(response).await;
    assert_eq!(record["id"], 1);
    assert_eq!(record["finished_quantity"], 65.0);
    assert!(record["production_date"].is_string());

    let list = response_json(app.get("/api/production").await).await;
    assert_eq!(list, json!([record]));

    assert_eq!(app.delete("/api/production/1").await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.delete("/api/production/1").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_json(app.get("/api/production").await).await, json!([]));
}

#[tokio::test]
async fn sale_total_amount_is_stored_as_supplied() {
    let app = TestApp::new().await;

    // total deliberately differs from quantity * price_per_unit
    let response = app
        .post(
            "/api/sales",
            json!({
                "product": "Basmati",
                "quantity": 10.0,
                "price_per_unit": 300.0,
                "total_amount": 2900.0,
                "customer_name": "Silva"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let sale = response_json(response).await;
    assert_eq!(sale["total_amount"], 2900.0);

    let list = response_json(app.get("/api/sales").await).await;
    assert_eq!(list[0], sale);

    assert_eq!(app.delete("/api/sales/1").await.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.delete("/api/sales/1").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn production_and_sales_have_no_update_route() {
    let app = TestApp::new().await;
    app.post(
        "/api/production",
        json!({"raw_material": "Paddy", "raw_quantity": 1.0, "finished_product": "Rice", "finished_quantity": 0.6}),
    )
    .await;

    let response = app.put("/api/production/1", json!({"raw_quantity": 2.0})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app.put("/api/sales/1", json!({"quantity": 2.0})).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let list = response_json(app.get("/api/production").await).await;
    assert_eq!(list[0]["raw_quantity"], 1.0);
}

#[tokio::test]
async fn incomplete_sale_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .post("/api/sales", json!({"product": "Basmati", "quantity": 10.0}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(app.get("/api/sales").await).await, json!([]));
}

#[tokio::test]
async fn incomplete_production_record_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .post(
            "/api/production",
            json!({"raw_material": "Paddy", "raw_quantity": 100.0, "finished_product": "White Rice"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("finished_quantity"));
    assert_eq!(response_json(app.get("/api/production").await).await, json!([]));
}

#[tokio::test]
async fn non_numeric_ids_are_not_found() {
    let app = TestApp::new().await;

    for path in ["/api/sales/abc", "/api/production/1.5", "/api/inventory/abc", "/api/orders/99999999999999999999"] {
        let response = app.delete(path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
        let body = response_json(response).await;
        assert_eq!(body["error"], "Record not found", "{path}");
    }

    let response = app.put("/api/orders/abc", json!({"status": "Completed"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response_json(response).await["error"].is_string());
}
