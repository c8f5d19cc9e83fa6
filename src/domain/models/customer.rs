// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 客户实体
///
/// 客户账户是订单和用户的归属单位，权限判断以客户ID为准。
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// 客户唯一标识符
    pub id: i64,
    /// 客户名称
    pub name: String,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
