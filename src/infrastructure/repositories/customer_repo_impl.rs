// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::customer::Customer;
use crate::domain::repositories::customer_repository::CustomerRepository;
use crate::domain::repositories::order_repository::RepositoryError;
use crate::infrastructure::database::entities::customer as customer_entity;
use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, *};
use std::sync::Arc;

/// 客户仓库实现
pub struct CustomerRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CustomerRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<customer_entity::Model> for Customer {
    fn from(m: customer_entity::Model) -> Self {
        Customer {
            id: m.id,
            name: m.name,
        }
    }
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, RepositoryError> {
        let model = customer_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn store(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let model = customer_entity::ActiveModel {
            id: Set(customer.id),
            name: Set(customer.name.clone()),
        };

        customer_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::column(customer_entity::Column::Id)
                    .update_column(customer_entity::Column::Name)
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(())
    }
}
