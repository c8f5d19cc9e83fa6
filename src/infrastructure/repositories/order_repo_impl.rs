// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{customer::Customer, item::Item, order::Order};
use crate::domain::repositories::order_repository::{OrderRepository, RepositoryError};
use crate::infrastructure::database::entities::{
    customer as customer_entity, item as item_entity, order as order_entity,
    order_item as order_item_entity,
};
use async_trait::async_trait;
use sea_orm::{sea_query::Expr, *};
use std::sync::Arc;
use tracing::debug;

/// 订单仓库实现
///
/// 订单行带有 `version` 列用于乐观锁；商品列表保存在 `order_items` 中，
/// 每次保存时整体替换。
pub struct OrderRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        let row = order_entity::Entity::find_by_id(id)
            .find_also_related(customer_entity::Entity)
            .one(self.db.as_ref())
            .await?;

        let (order, customer) = match row {
            Some((order, Some(customer))) => (order, Customer::from(customer)),
            Some((_, None)) => return Err(RepositoryError::NotFound),
            None => return Ok(None),
        };

        let items = order_item_entity::Entity::find()
            .filter(order_item_entity::Column::OrderId.eq(id))
            .order_by_asc(order_item_entity::Column::Position)
            .find_also_related(item_entity::Entity)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|(_, item)| item.map(Item::from).ok_or(RepositoryError::NotFound))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Order::restore(order.id, customer, items, order.version)))
    }

    async fn store(&self, order: &Order) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        let exists = order_entity::Entity::find_by_id(order.id)
            .one(&txn)
            .await?
            .is_some();

        if exists {
            let result = order_entity::Entity::update_many()
                .col_expr(
                    order_entity::Column::Version,
                    Expr::col(order_entity::Column::Version).add(1),
                )
                .filter(order_entity::Column::Id.eq(order.id))
                .filter(order_entity::Column::Version.eq(order.version))
                .exec(&txn)
                .await?;

            if result.rows_affected == 0 {
                txn.rollback().await?;
                debug!(
                    "Order {} version {} is stale, rejecting write",
                    order.id, order.version
                );
                return Err(RepositoryError::Conflict {
                    entity: "Order",
                    id: order.id,
                });
            }
        } else {
            let model = order_entity::ActiveModel {
                id: Set(order.id),
                customer_id: Set(order.customer.id),
                version: Set(order.version + 1),
            };
            order_entity::Entity::insert(model)
                .exec_without_returning(&txn)
                .await?;
        }

        order_item_entity::Entity::delete_many()
            .filter(order_item_entity::Column::OrderId.eq(order.id))
            .exec(&txn)
            .await?;

        let rows: Vec<order_item_entity::ActiveModel> = order
            .items()
            .iter()
            .enumerate()
            .map(|(position, item)| order_item_entity::ActiveModel {
                order_id: Set(order.id),
                position: Set(position as i32),
                item_id: Set(item.id),
            })
            .collect();

        if !rows.is_empty() {
            order_item_entity::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }
}
