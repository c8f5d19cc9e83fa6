// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed, setup_db};
use orderdesk::domain::models::{customer::Customer, user::User};
use orderdesk::domain::repositories::customer_repository::CustomerRepository;
use orderdesk::domain::repositories::item_repository::ItemRepository;
use orderdesk::domain::repositories::user_repository::UserRepository;
use orderdesk::infrastructure::repositories::customer_repo_impl::CustomerRepositoryImpl;
use orderdesk::infrastructure::repositories::item_repo_impl::ItemRepositoryImpl;
use orderdesk::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;

#[tokio::test]
async fn test_user_is_loaded_with_customer() {
    let db = setup_db().await;
    seed(&db).await;
    let repo = UserRepositoryImpl::new(db.clone());

    let user = repo.find_by_id(3).await.unwrap().unwrap();

    assert!(user.is_admin);
    assert_eq!(user.customer, Customer::new(30, "Customer 30"));
    assert!(repo.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_replaces_existing_rows() {
    let db = setup_db().await;
    seed(&db).await;
    let users = UserRepositoryImpl::new(db.clone());
    let customers = CustomerRepositoryImpl::new(db.clone());
    let items = ItemRepositoryImpl::new(db.clone());

    customers.store(&Customer::new(20, "Renamed")).await.unwrap();
    users.store(&User::admin(1, Customer::new(20, "Renamed"))).await.unwrap();

    let user = users.find_by_id(1).await.unwrap().unwrap();
    assert!(user.is_admin);
    assert_eq!(user.customer.id, 20);
    assert_eq!(user.customer.name, "Renamed");

    let sold_out = items.find_by_id(43).await.unwrap().unwrap();
    assert!(!sold_out.available);
    assert!((sold_out.value - 5.0).abs() < f64::EPSILON);
}
