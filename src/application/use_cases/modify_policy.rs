// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{order::Order, user::User};

/// 用户与订单是否属于同一客户
pub fn same_customer(user: &User, order: &Order) -> bool {
    user.customer.id == order.customer.id
}

/// 订单修改授权策略
///
/// 决定用户是否可以向订单添加商品，并提供日志中使用的操作者名称。
pub trait ModifyPolicy: Send + Sync {
    /// 判断用户是否有权修改订单
    fn can_modify(&self, user: &User, order: &Order) -> bool;

    /// 日志中的操作者名称，例如 "User" 或 "Admin"
    fn actor(&self) -> &'static str;

    /// 拒绝时附加在日志与错误信息末尾的原因
    fn denial_reason(&self) -> Option<&'static str> {
        None
    }
}

/// 客户归属策略：用户只能修改本客户账户下的订单
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipPolicy;

impl ModifyPolicy for OwnershipPolicy {
    fn can_modify(&self, user: &User, order: &Order) -> bool {
        same_customer(user, order)
    }

    fn actor(&self) -> &'static str {
        "User"
    }
}

/// 管理员策略：只有管理员可以修改订单，不要求客户归属一致
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminPolicy;

impl ModifyPolicy for AdminPolicy {
    fn can_modify(&self, user: &User, _order: &Order) -> bool {
        user.is_admin
    }

    fn actor(&self) -> &'static str {
        "Admin"
    }

    fn denial_reason(&self) -> Option<&'static str> {
        Some("because they are not an administrator")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::customer::Customer;

    fn order_of(customer_id: i64) -> Order {
        Order::new(5, Customer::new(customer_id, "Owner"))
    }

    #[test]
    fn test_ownership_policy_requires_same_customer() {
        let policy = OwnershipPolicy;
        let owner = User::new(1, Customer::new(10, "Owner"));
        let stranger = User::admin(2, Customer::new(20, "Other"));

        assert!(policy.can_modify(&owner, &order_of(10)));
        assert!(!policy.can_modify(&stranger, &order_of(10)));
    }

    #[test]
    fn test_admin_policy_ignores_ownership() {
        let policy = AdminPolicy;
        let owner = User::new(1, Customer::new(10, "Owner"));
        let admin = User::admin(2, Customer::new(20, "Other"));

        assert!(!policy.can_modify(&owner, &order_of(10)));
        assert!(policy.can_modify(&admin, &order_of(10)));
        assert!(policy.denial_reason().is_some());
    }
}
