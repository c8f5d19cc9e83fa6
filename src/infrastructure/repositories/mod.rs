// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的具体实现
/// 基于 SeaORM 访问关系型数据库
pub mod customer_repo_impl;
pub mod item_repo_impl;
pub mod order_repo_impl;
pub mod user_repo_impl;
