// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::customer::Customer;

/// 用户实体
///
/// 每个用户恰好属于一个客户账户，管理员标志决定是否可以代其他客户操作订单。
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 用户唯一标识符
    pub id: i64,
    /// 是否为管理员
    pub is_admin: bool,
    /// 所属客户
    pub customer: Customer,
}

impl User {
    pub fn new(id: i64, customer: Customer) -> Self {
        Self {
            id,
            is_admin: false,
            customer,
        }
    }

    /// 创建管理员用户
    pub fn admin(id: i64, customer: Customer) -> Self {
        Self {
            id,
            is_admin: true,
            customer,
        }
    }
}
