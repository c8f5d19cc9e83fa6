// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::customer::Customer;
use super::item::Item;
use thiserror::Error;

/// 单个订单允许的最大总金额
pub const MAX_ORDER_VALUE: f64 = 250.00;

/// 订单实体
///
/// 订单归属于一个客户，商品按加入顺序保存。
/// 商品只能通过 [`Order::add`] 加入，以保证每个商品都经过领域规则检查。
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// 订单唯一标识符
    pub id: i64,
    /// 所属客户
    pub customer: Customer,
    /// 订单中的商品（按加入顺序）
    items: Vec<Item>,
    /// 乐观锁版本号，每次持久化成功后递增
    pub version: i64,
}

/// 领域错误类型
///
/// 订单领域规则拒绝商品时返回，调用方只应使用其文本描述。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 商品不可售
    #[error("Cannot add unavailable items to order")]
    ItemUnavailable,

    /// 订单总金额超出上限
    #[error("An order may not exceed a total value of ${limit:.2}")]
    OrderValueExceeded { limit: f64 },
}

impl Order {
    /// 创建一个空订单
    pub fn new(id: i64, customer: Customer) -> Self {
        Self {
            id,
            customer,
            items: Vec::new(),
            version: 0,
        }
    }

    /// 从持久化数据重建订单
    ///
    /// 仅供仓库实现使用：数据库中的商品在写入时已经通过了 [`Order::add`] 的检查。
    pub(crate) fn restore(id: i64, customer: Customer, items: Vec<Item>, version: i64) -> Self {
        Self {
            id,
            customer,
            items,
            version,
        }
    }

    /// 订单中的商品，按加入顺序排列
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// 订单当前总金额
    pub fn value(&self) -> f64 {
        self.items.iter().map(|item| item.value).sum()
    }

    /// 向订单添加商品
    ///
    /// # 参数
    ///
    /// * `item` - 待加入的商品
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 商品已加入订单末尾
    /// * `Err(DomainError)` - 商品不可售，或加入后总金额超过 [`MAX_ORDER_VALUE`]
    pub fn add(&mut self, item: Item) -> Result<(), DomainError> {
        if !item.available {
            return Err(DomainError::ItemUnavailable);
        }
        if self.value() + item.value > MAX_ORDER_VALUE {
            return Err(DomainError::OrderValueExceeded {
                limit: MAX_ORDER_VALUE,
            });
        }
        self.items.push(item);
        Ok(())
    }
}
