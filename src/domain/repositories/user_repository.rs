// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::order_repository::RepositoryError;
use crate::domain::models::user::User;
use async_trait::async_trait;

/// 用户仓库特质
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据ID查找用户，返回的用户包含其所属客户
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError>;
    /// 保存用户（新增或整体替换）
    async fn store(&self, user: &User) -> Result<(), RepositoryError>;
}
