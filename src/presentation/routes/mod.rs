// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::order_interactor::OrderUseCase;
use crate::presentation::handlers::order_handler::{self, AdminOrders};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `orders` - 按客户归属授权的订单用例
/// * `admin_orders` - 仅允许管理员修改的订单用例
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(orders: Arc<dyn OrderUseCase>, admin_orders: Arc<dyn OrderUseCase>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/orders", get(order_handler::show_order))
        .route("/orders/items", post(order_handler::add_item))
        .route("/admin/orders/items", post(order_handler::add_item_as_admin))
        .layer(Extension(orders))
        .layer(Extension(AdminOrders(admin_orders)))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
