// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 商品实体
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// 商品唯一标识符
    pub id: i64,
    /// 展示名称
    pub name: String,
    /// 商品金额，不带货币单位
    pub value: f64,
    /// 是否可售，不可售的商品不能加入订单
    pub available: bool,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            available: true,
        }
    }
}
