// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// 日志上下文
///
/// 记录一次业务判断涉及的实体ID，便于事后还原决策过程。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogContext {
    pub user_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub order_id: Option<i64>,
    /// 订单所属客户，可能与用户所属客户不同
    pub order_customer_id: Option<i64>,
    pub item_id: Option<i64>,
}

impl LogContext {
    pub fn user(mut self, id: i64) -> Self {
        self.user_id = Some(id);
        self
    }

    pub fn customer(mut self, id: i64) -> Self {
        self.customer_id = Some(id);
        self
    }

    pub fn order(mut self, id: i64) -> Self {
        self.order_id = Some(id);
        self
    }

    pub fn order_customer(mut self, id: i64) -> Self {
        self.order_customer_id = Some(id);
        self
    }

    pub fn item(mut self, id: i64) -> Self {
        self.item_id = Some(id);
        self
    }
}

/// 单条日志记录
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub context: LogContext,
}

impl LogEntry {
    pub fn info(message: impl Into<String>, context: LogContext) -> Self {
        Self {
            level: LogLevel::Info,
            message: message.into(),
            context,
        }
    }

    pub fn warn(message: impl Into<String>, context: LogContext) -> Self {
        Self {
            level: LogLevel::Warn,
            message: message.into(),
            context,
        }
    }

    pub fn error(message: impl Into<String>, context: LogContext) -> Self {
        Self {
            level: LogLevel::Error,
            message: message.into(),
            context,
        }
    }
}

/// 日志端口
///
/// 用例层通过该接口输出业务日志，具体输出方式由基础设施层决定。
pub trait Logger: Send + Sync {
    /// 记录一条日志
    fn log(&self, entry: &LogEntry);
}
