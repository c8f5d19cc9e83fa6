// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::order_repository::RepositoryError;
use crate::domain::models::customer::Customer;
use async_trait::async_trait;

/// 客户仓库特质
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 根据ID查找客户
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, RepositoryError>;
    /// 保存客户（新增或整体替换）
    async fn store(&self, customer: &Customer) -> Result<(), RepositoryError>;
}
