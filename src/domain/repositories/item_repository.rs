// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::order_repository::RepositoryError;
use crate::domain::models::item::Item;
use async_trait::async_trait;

/// 商品仓库特质
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// 根据ID查找商品
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, RepositoryError>;
    /// 保存商品（新增或整体替换）
    async fn store(&self, item: &Item) -> Result<(), RepositoryError>;
}
