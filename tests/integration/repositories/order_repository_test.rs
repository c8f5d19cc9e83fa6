// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed, setup_db};
use orderdesk::domain::models::item::Item;
use orderdesk::domain::repositories::item_repository::ItemRepository;
use orderdesk::domain::repositories::order_repository::{OrderRepository, RepositoryError};
use orderdesk::infrastructure::repositories::item_repo_impl::ItemRepositoryImpl;
use orderdesk::infrastructure::repositories::order_repo_impl::OrderRepositoryImpl;

#[tokio::test]
async fn test_find_missing_order_returns_none() {
    let db = setup_db().await;
    let repo = OrderRepositoryImpl::new(db.clone());

    assert!(repo.find_by_id(404).await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_round_trips_items_in_order() {
    let db = setup_db().await;
    seed(&db).await;
    let repo = OrderRepositoryImpl::new(db.clone());
    let items = ItemRepositoryImpl::new(db.clone());
    items.store(&Item::new(7, "Gadget", 12.5)).await.unwrap();

    let mut order = repo.find_by_id(5).await.unwrap().unwrap();
    assert_eq!(order.customer.id, 10);
    assert!(order.items().is_empty());
    assert_eq!(order.version, 1);

    order.add(Item::new(7, "Gadget", 12.5)).unwrap();
    order.add(Item::new(42, "Widget", 9.99)).unwrap();
    repo.store(&order).await.unwrap();

    let reloaded = repo.find_by_id(5).await.unwrap().unwrap();
    let ids: Vec<i64> = reloaded.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![7, 42]);
    assert_eq!(reloaded.items()[1].name, "Widget");
    assert_eq!(reloaded.version, 2);
}

#[tokio::test]
async fn test_stale_store_is_rejected() {
    let db = setup_db().await;
    seed(&db).await;
    let repo = OrderRepositoryImpl::new(db.clone());

    let mut first = repo.find_by_id(5).await.unwrap().unwrap();
    let mut second = repo.find_by_id(5).await.unwrap().unwrap();

    first.add(Item::new(42, "Widget", 9.99)).unwrap();
    repo.store(&first).await.unwrap();

    second.add(Item::new(44, "Console", 245.0)).unwrap();
    let result = repo.store(&second).await;

    assert!(matches!(
        result,
        Err(RepositoryError::Conflict { entity: "Order", id: 5 })
    ));

    let reloaded = repo.find_by_id(5).await.unwrap().unwrap();
    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.items()[0].id, 42);
}
