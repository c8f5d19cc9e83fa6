// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use orderdesk::domain::models::customer::Customer;
use orderdesk::domain::models::item::Item;
use orderdesk::domain::models::order::{DomainError, Order, MAX_ORDER_VALUE};

fn empty_order() -> Order {
    Order::new(5, Customer::new(10, "Acme"))
}

#[test]
fn test_add_appends_in_insertion_order() {
    let mut order = empty_order();

    order.add(Item::new(2, "Second", 1.0)).unwrap();
    order.add(Item::new(1, "First", 2.0)).unwrap();

    let ids: Vec<i64> = order.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert!((order.value() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_add_rejects_unavailable_item() {
    let mut order = empty_order();
    let mut item = Item::new(1, "Sold out", 1.0);
    item.available = false;

    let err = order.add(item).unwrap_err();

    assert_eq!(err, DomainError::ItemUnavailable);
    assert_eq!(err.to_string(), "Cannot add unavailable items to order");
    assert!(order.items().is_empty());
}

#[test]
fn test_add_allows_reaching_the_value_limit() {
    let mut order = empty_order();

    order.add(Item::new(1, "Big", 200.0)).unwrap();
    order.add(Item::new(2, "Rest", 50.0)).unwrap();

    assert!((order.value() - MAX_ORDER_VALUE).abs() < f64::EPSILON);
}

#[test]
fn test_add_rejects_exceeding_the_value_limit() {
    let mut order = empty_order();
    order.add(Item::new(1, "Big", 200.0)).unwrap();

    let err = order.add(Item::new(2, "Too much", 50.01)).unwrap_err();

    assert_eq!(
        err.to_string(),
        "An order may not exceed a total value of $250.00"
    );
    assert_eq!(order.items().len(), 1);
}
