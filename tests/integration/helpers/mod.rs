// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use orderdesk::application::use_cases::order_interactor::{
    AdminOrderInteractor, OrderInteractor, OrderUseCase,
};
use orderdesk::domain::logging::Logger;
use orderdesk::domain::models::{customer::Customer, item::Item, order::Order, user::User};
use orderdesk::domain::repositories::{
    customer_repository::CustomerRepository, item_repository::ItemRepository,
    order_repository::OrderRepository, user_repository::UserRepository,
};
use orderdesk::infrastructure::observability::logger::TracingLogger;
use orderdesk::infrastructure::repositories::{
    customer_repo_impl::CustomerRepositoryImpl, item_repo_impl::ItemRepositoryImpl,
    order_repo_impl::OrderRepositoryImpl, user_repo_impl::UserRepositoryImpl,
};
use orderdesk::presentation::routes;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

/// 连接内存 SQLite 并执行迁移
///
/// 内存数据库只在单个连接内可见，因此连接池固定为一个连接
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1);
    let db = Database::connect(opt).await.unwrap();
    let db = Arc::new(db);
    Migrator::up(db.as_ref(), None).await.unwrap();
    db
}

/// 写入测试数据
///
/// - 客户 10、20、30
/// - 用户 1（客户 10）、用户 2（客户 20）、管理员 3（客户 30）
/// - 商品 42 Widget、43 不可售、44 高价商品
/// - 订单 5（客户 10，空）
pub async fn seed(db: &Arc<DatabaseConnection>) {
    let customers = CustomerRepositoryImpl::new(db.clone());
    let users = UserRepositoryImpl::new(db.clone());
    let items = ItemRepositoryImpl::new(db.clone());
    let orders = OrderRepositoryImpl::new(db.clone());

    for id in [10, 20, 30] {
        customers
            .store(&Customer::new(id, format!("Customer {}", id)))
            .await
            .unwrap();
    }

    users.store(&User::new(1, Customer::new(10, "Customer 10"))).await.unwrap();
    users.store(&User::new(2, Customer::new(20, "Customer 20"))).await.unwrap();
    users.store(&User::admin(3, Customer::new(30, "Customer 30"))).await.unwrap();

    let mut sold_out = Item::new(43, "Sold out", 5.0);
    sold_out.available = false;
    for item in [Item::new(42, "Widget", 9.99), sold_out, Item::new(44, "Console", 245.0)] {
        items.store(&item).await.unwrap();
    }

    orders
        .store(&Order::new(5, Customer::new(10, "Customer 10")))
        .await
        .unwrap();
}

pub struct TestApp {
    pub server: TestServer,
    pub order_repo: Arc<OrderRepositoryImpl>,
}

pub async fn create_test_app() -> TestApp {
    let db = setup_db().await;
    seed(&db).await;

    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let order_repo = Arc::new(OrderRepositoryImpl::new(db.clone()));
    let item_repo = Arc::new(ItemRepositoryImpl::new(db.clone()));
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

    let orders: Arc<dyn OrderUseCase> = Arc::new(OrderInteractor::new(
        user_repo.clone(),
        order_repo.clone(),
        item_repo.clone(),
        logger.clone(),
    ));
    let admin_orders: Arc<dyn OrderUseCase> = Arc::new(AdminOrderInteractor::new_admin(
        user_repo,
        order_repo.clone(),
        item_repo,
        logger,
    ));

    let server = TestServer::new(routes::routes(orders, admin_orders)).unwrap();

    TestApp {
        server,
        order_repo,
    }
}
