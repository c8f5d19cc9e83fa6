// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Form, Query},
    http::StatusCode,
};
use std::fmt::Write;
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::{
        dto::order_request::{AddOrderItemDto, OrderItemsQueryDto},
        use_cases::order_interactor::OrderUseCase,
    },
    domain::models::item::Item,
    presentation::errors::AppError,
};

/// 管理员订单用例，与普通订单用例区分注入
#[derive(Clone)]
pub struct AdminOrders(pub Arc<dyn OrderUseCase>);

/// 以纯文本列出订单中的商品
pub async fn show_order(
    Extension(orders): Extension<Arc<dyn OrderUseCase>>,
    Query(params): Query<OrderItemsQueryDto>,
) -> Result<String, AppError> {
    params.validate()?;
    let items = orders.items(params.user_id, params.order_id).await?;
    Ok(render_items(&items)?)
}

/// 用户向本客户的订单添加商品
pub async fn add_item(
    Extension(orders): Extension<Arc<dyn OrderUseCase>>,
    Form(form): Form<AddOrderItemDto>,
) -> Result<(StatusCode, &'static str), AppError> {
    form.validate()?;
    orders
        .add(form.user_id, form.order_id, form.item_id)
        .await?;
    Ok((StatusCode::CREATED, "OK\n"))
}

/// 管理员向任意订单添加商品
pub async fn add_item_as_admin(
    Extension(AdminOrders(orders)): Extension<AdminOrders>,
    Form(form): Form<AddOrderItemDto>,
) -> Result<(StatusCode, &'static str), AppError> {
    form.validate()?;
    orders
        .add(form.user_id, form.order_id, form.item_id)
        .await?;
    Ok((StatusCode::CREATED, "OK\n"))
}

fn render_items(items: &[Item]) -> Result<String, std::fmt::Error> {
    let mut body = String::new();
    for item in items {
        writeln!(body, "item id: {}", item.id)?;
        writeln!(body, "item name: {}", item.name)?;
        writeln!(body, "item value: {:.6}", item.value)?;
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_items_plain_text() {
        let items = vec![Item::new(42, "Widget", 9.99), Item::new(7, "Gadget", 20.0)];

        let body = render_items(&items).unwrap();

        assert_eq!(
            body,
            "item id: 42\nitem name: Widget\nitem value: 9.990000\nitem id: 7\nitem name: Gadget\nitem value: 20.000000\n"
        );
    }

    #[test]
    fn test_render_no_items() {
        assert_eq!(render_items(&[]).unwrap(), "");
    }
}
