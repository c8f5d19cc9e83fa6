// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::item::Item;
use crate::domain::repositories::item_repository::ItemRepository;
use crate::domain::repositories::order_repository::RepositoryError;
use crate::infrastructure::database::entities::item as item_entity;
use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, *};
use std::sync::Arc;

/// 商品仓库实现
pub struct ItemRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ItemRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<item_entity::Model> for Item {
    fn from(m: item_entity::Model) -> Self {
        Item {
            id: m.id,
            name: m.name,
            value: m.value,
            available: m.available,
        }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryImpl {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, RepositoryError> {
        let model = item_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn store(&self, item: &Item) -> Result<(), RepositoryError> {
        let model = item_entity::ActiveModel {
            id: Set(item.id),
            name: Set(item.name.clone()),
            value: Set(item.value),
            available: Set(item.available),
        };

        item_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::column(item_entity::Column::Id)
                    .update_columns([
                        item_entity::Column::Name,
                        item_entity::Column::Value,
                        item_entity::Column::Available,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(())
    }
}
