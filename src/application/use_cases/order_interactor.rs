// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::modify_policy::{same_customer, AdminPolicy, ModifyPolicy, OwnershipPolicy};
use crate::domain::{
    logging::{LogContext, LogEntry, Logger},
    models::{
        item::Item,
        order::{DomainError, Order},
        user::User,
    },
    repositories::{
        item_repository::ItemRepository,
        order_repository::{OrderRepository, RepositoryError},
        user_repository::UserRepository,
    },
};
use async_trait::async_trait;
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderInteractorError {
    #[error("{0}")]
    Authorization(String),
    #[error("{message}")]
    BusinessRuleViolation {
        message: String,
        #[source]
        source: DomainError,
    },
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("{0}")]
    Conflict(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 订单用例接口
///
/// 表示层通过该接口查看与修改订单，不关心具体使用的授权策略。
#[async_trait]
pub trait OrderUseCase: Send + Sync {
    /// 查看订单中的商品
    async fn items(&self, user_id: i64, order_id: i64) -> Result<Vec<Item>, OrderInteractorError>;

    /// 向订单添加商品
    async fn add(&self, user_id: i64, order_id: i64, item_id: i64)
        -> Result<(), OrderInteractorError>;
}

/// 订单用例实现
///
/// 查看商品始终要求用户与订单属于同一客户；添加商品的授权由策略 `P` 决定，
/// 其余流程（获取商品、领域规则检查、持久化、日志）对所有策略相同。
pub struct OrderInteractor<UR, OR, IR, P = OwnershipPolicy> {
    user_repo: Arc<UR>,
    order_repo: Arc<OR>,
    item_repo: Arc<IR>,
    logger: Arc<dyn Logger>,
    policy: P,
}

/// 管理员订单用例：只有管理员可以添加商品
pub type AdminOrderInteractor<UR, OR, IR> = OrderInteractor<UR, OR, IR, AdminPolicy>;

impl<UR, OR, IR> OrderInteractor<UR, OR, IR, OwnershipPolicy> {
    pub fn new(
        user_repo: Arc<UR>,
        order_repo: Arc<OR>,
        item_repo: Arc<IR>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self::with_policy(user_repo, order_repo, item_repo, logger, OwnershipPolicy)
    }
}

impl<UR, OR, IR> OrderInteractor<UR, OR, IR, AdminPolicy> {
    pub fn new_admin(
        user_repo: Arc<UR>,
        order_repo: Arc<OR>,
        item_repo: Arc<IR>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self::with_policy(user_repo, order_repo, item_repo, logger, AdminPolicy)
    }
}

impl<UR, OR, IR, P> OrderInteractor<UR, OR, IR, P> {
    pub fn with_policy(
        user_repo: Arc<UR>,
        order_repo: Arc<OR>,
        item_repo: Arc<IR>,
        logger: Arc<dyn Logger>,
        policy: P,
    ) -> Self {
        Self {
            user_repo,
            order_repo,
            item_repo,
            logger,
            policy,
        }
    }
}

impl<UR, OR, IR, P> OrderInteractor<UR, OR, IR, P>
where
    UR: UserRepository + 'static,
    OR: OrderRepository + 'static,
    IR: ItemRepository + 'static,
    P: ModifyPolicy + 'static,
{
    /// 查看订单中的商品
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Item>)` - 订单商品的副本，保持加入顺序
    /// * `Err(OrderInteractorError::Authorization)` - 用户与订单不属于同一客户
    /// * `Err(OrderInteractorError::NotFound)` - 用户或订单不存在
    pub async fn items(
        &self,
        user_id: i64,
        order_id: i64,
    ) -> Result<Vec<Item>, OrderInteractorError> {
        let user = self.fetch_user(user_id).await?;
        let order = self.fetch_order(&user, order_id).await?;

        if !same_customer(&user, &order) {
            let message = format!(
                "User #{} (customer #{}) is not allowed to see items in order #{} (of customer #{})",
                user.id, user.customer.id, order.id, order.customer.id
            );
            counter!("order_authorization_denied_total", "operation" => "items").increment(1);
            self.logger
                .log(&LogEntry::warn(message.clone(), Self::context(&user, &order)));
            return Err(OrderInteractorError::Authorization(message));
        }

        Ok(order.items().to_vec())
    }

    /// 向订单添加商品
    ///
    /// 依次执行：获取用户与订单、授权检查、获取商品、领域规则检查、持久化。
    /// 任一步骤失败都不会写入订单。
    pub async fn add(
        &self,
        user_id: i64,
        order_id: i64,
        item_id: i64,
    ) -> Result<(), OrderInteractorError> {
        let user = self.fetch_user(user_id).await?;
        let mut order = self.fetch_order(&user, order_id).await?;
        let context = Self::context(&user, &order);

        if !self.policy.can_modify(&user, &order) {
            let mut message = format!(
                "User #{} (customer #{}) is not allowed to add items to order #{} (of customer #{})",
                user.id, user.customer.id, order.id, order.customer.id
            );
            if let Some(reason) = self.policy.denial_reason() {
                message.push_str(", ");
                message.push_str(reason);
            }
            counter!(
                "order_authorization_denied_total",
                "operation" => "add",
                "actor" => self.policy.actor()
            )
            .increment(1);
            self.logger.log(&LogEntry::warn(message.clone(), context));
            return Err(OrderInteractorError::Authorization(message));
        }

        let item = self.fetch_item(item_id, context).await?;
        let context = context.item(item.id);
        let item_name = item.name.clone();

        if let Err(domain_err) = order.add(item) {
            let message = format!(
                "Could not add item #{} to order #{} (of customer #{}) as user #{} because a business rule was violated: '{}'",
                item_id, order.id, order.customer.id, user.id, domain_err
            );
            counter!("order_business_rule_rejected_total").increment(1);
            self.logger.log(&LogEntry::warn(message.clone(), context));
            return Err(OrderInteractorError::BusinessRuleViolation {
                message,
                source: domain_err,
            });
        }

        match self.order_repo.store(&order).await {
            Ok(()) => {}
            Err(RepositoryError::Conflict { .. }) => {
                let message = format!(
                    "Could not add item #{} to order #{} as user #{} because the order was modified concurrently",
                    item_id, order.id, user.id
                );
                self.logger.log(&LogEntry::warn(message.clone(), context));
                return Err(OrderInteractorError::Conflict(message));
            }
            Err(e) => return Err(self.repository_failure(e, context)),
        }

        counter!("order_items_added_total", "actor" => self.policy.actor()).increment(1);
        self.logger.log(&LogEntry::info(
            format!(
                "{} added item '{}' (#{}) to order #{}",
                self.policy.actor(),
                item_name,
                item_id,
                order.id
            ),
            context,
        ));
        Ok(())
    }

    fn context(user: &User, order: &Order) -> LogContext {
        LogContext::default()
            .user(user.id)
            .customer(user.customer.id)
            .order(order.id)
            .order_customer(order.customer.id)
    }

    async fn fetch_user(&self, user_id: i64) -> Result<User, OrderInteractorError> {
        let context = LogContext::default().user(user_id);
        match self.user_repo.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(self.not_found("User", user_id, context)),
            Err(e) => Err(self.repository_failure(e, context)),
        }
    }

    async fn fetch_order(&self, user: &User, order_id: i64) -> Result<Order, OrderInteractorError> {
        let context = LogContext::default()
            .user(user.id)
            .customer(user.customer.id)
            .order(order_id);
        match self.order_repo.find_by_id(order_id).await {
            Ok(Some(order)) => Ok(order),
            Ok(None) => Err(self.not_found("Order", order_id, context)),
            Err(e) => Err(self.repository_failure(e, context)),
        }
    }

    async fn fetch_item(
        &self,
        item_id: i64,
        context: LogContext,
    ) -> Result<Item, OrderInteractorError> {
        let context = context.item(item_id);
        match self.item_repo.find_by_id(item_id).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(self.not_found("Item", item_id, context)),
            Err(e) => Err(self.repository_failure(e, context)),
        }
    }

    fn not_found(&self, entity: &'static str, id: i64, context: LogContext) -> OrderInteractorError {
        let err = OrderInteractorError::NotFound { entity, id };
        self.logger.log(&LogEntry::warn(err.to_string(), context));
        err
    }

    fn repository_failure(&self, err: RepositoryError, context: LogContext) -> OrderInteractorError {
        self.logger
            .log(&LogEntry::error(format!("Repository failure: {}", err), context));
        OrderInteractorError::Repository(err)
    }
}

#[async_trait]
impl<UR, OR, IR, P> OrderUseCase for OrderInteractor<UR, OR, IR, P>
where
    UR: UserRepository + 'static,
    OR: OrderRepository + 'static,
    IR: ItemRepository + 'static,
    P: ModifyPolicy + 'static,
{
    async fn items(&self, user_id: i64, order_id: i64) -> Result<Vec<Item>, OrderInteractorError> {
        OrderInteractor::items(self, user_id, order_id).await
    }

    async fn add(
        &self,
        user_id: i64,
        order_id: i64,
        item_id: i64,
    ) -> Result<(), OrderInteractorError> {
        OrderInteractor::add(self, user_id, order_id, item_id).await
    }
}
