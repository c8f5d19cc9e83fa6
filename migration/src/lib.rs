// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_customers_and_users;
mod m20250101_000002_create_items;
mod m20250101_000003_create_orders;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_customers_and_users::Migration),
            Box::new(m20250101_000002_create_items::Migration),
            Box::new(m20250101_000003_create_orders::Migration),
        ]
    }
}
