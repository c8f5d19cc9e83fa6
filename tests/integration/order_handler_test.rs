// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use orderdesk::domain::repositories::order_repository::OrderRepository;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_show_order_lists_items_as_text() {
    let app = create_test_app().await;

    app.server
        .post("/orders/items")
        .form(&[("userId", "1"), ("orderId", "5"), ("itemId", "42")])
        .await
        .assert_status(StatusCode::CREATED);

    let response = app
        .server
        .get("/orders")
        .add_query_param("userId", 1)
        .add_query_param("orderId", 5)
        .await;

    response.assert_status_ok();
    response.assert_text("item id: 42\nitem name: Widget\nitem value: 9.990000\n");
}

#[tokio::test]
async fn test_show_order_denied_for_other_customer() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/orders")
        .add_query_param("userId", 2)
        .add_query_param("orderId", 5)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert!(response
        .text()
        .contains("User #2 (customer #20) is not allowed to see items in order #5 (of customer #10)"));
}

#[tokio::test]
async fn test_show_order_rejects_invalid_ids() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/orders")
        .add_query_param("userId", 0)
        .add_query_param("orderId", 5)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_show_missing_order_is_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/orders")
        .add_query_param("userId", 1)
        .add_query_param("orderId", 77)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_item_business_rule_violation() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/orders/items")
        .form(&[("userId", "1"), ("orderId", "5"), ("itemId", "43")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("business rule was violated"));

    let order = app.order_repo.find_by_id(5).await.unwrap().unwrap();
    assert!(order.items().is_empty());
}

#[tokio::test]
async fn test_admin_route_requires_administrator() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/admin/orders/items")
        .form(&[("userId", "1"), ("orderId", "5"), ("itemId", "42")])
        .await;
    response.assert_status(StatusCode::FORBIDDEN);

    app.server
        .post("/admin/orders/items")
        .form(&[("userId", "3"), ("orderId", "5"), ("itemId", "44")])
        .await
        .assert_status(StatusCode::CREATED);

    let order = app.order_repo.find_by_id(5).await.unwrap().unwrap();
    assert_eq!(order.items().len(), 1);
    assert_eq!(order.items()[0].id, 44);
}
