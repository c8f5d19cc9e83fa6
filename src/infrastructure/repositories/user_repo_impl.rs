// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::order_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::{customer as customer_entity, user as user_entity};
use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, *};
use std::sync::Arc;

/// 用户仓库实现
///
/// 读取用户时一并加载其所属客户。
pub struct UserRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let row = user_entity::Entity::find_by_id(id)
            .find_also_related(customer_entity::Entity)
            .one(self.db.as_ref())
            .await?;

        match row {
            Some((user, Some(customer))) => Ok(Some(User {
                id: user.id,
                is_admin: user.is_admin,
                customer: customer.into(),
            })),
            // 用户必须属于一个客户
            Some((_, None)) => Err(RepositoryError::NotFound),
            None => Ok(None),
        }
    }

    /// 保存用户，所属客户需已存在
    async fn store(&self, user: &User) -> Result<(), RepositoryError> {
        let model = user_entity::ActiveModel {
            id: Set(user.id),
            customer_id: Set(user.customer.id),
            is_admin: Set(user.is_admin),
        };

        user_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::column(user_entity::Column::Id)
                    .update_columns([
                        user_entity::Column::CustomerId,
                        user_entity::Column::IsAdmin,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(())
    }
}
