// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::order::Order;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 乐观锁冲突，记录已被其他请求修改
    #[error("{entity} #{id} was modified concurrently")]
    Conflict { entity: &'static str, id: i64 },
}

/// 订单仓库特质
///
/// 定义订单数据访问接口。
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 根据ID查找订单
    ///
    /// # 参数
    ///
    /// * `id` - 订单的唯一标识符
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Order))` - 找到订单时返回订单实体（包含按顺序排列的商品）
    /// * `Ok(None)` - 未找到订单
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError>;

    /// 保存订单
    ///
    /// 以整体替换的方式写入订单及其商品列表。订单的 `version` 必须与存储中的版本一致，
    /// 否则返回 [`RepositoryError::Conflict`]，写入成功后存储中的版本加一。
    ///
    /// # 参数
    ///
    /// * `order` - 要保存的订单
    async fn store(&self, order: &Order) -> Result<(), RepositoryError>;
}
