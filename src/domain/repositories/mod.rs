// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 客户仓库（customer_repository）
/// - 商品仓库（item_repository）
/// - 订单仓库（order_repository）：同时定义了通用的仓库错误类型
/// - 用户仓库（user_repository）
pub mod customer_repository;
pub mod item_repository;
pub mod order_repository;
pub mod user_repository;
