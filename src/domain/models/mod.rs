// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 客户（customer）：订单与用户的归属账户
/// - 用户（user）：发起操作的主体，带有管理员标志
/// - 商品（item）：可以加入订单的商品
/// - 订单（order）：客户的订单，负责商品加入的领域规则
pub mod customer;
pub mod item;
pub mod order;
pub mod user;
