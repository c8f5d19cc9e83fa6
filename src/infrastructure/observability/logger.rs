// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::logging::{LogEntry, LogLevel, Logger};
use tracing::{error, info, warn};

/// 基于 tracing 的日志实现
///
/// 将日志上下文中的实体ID作为结构化字段输出。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, entry: &LogEntry) {
        let c = entry.context;
        match entry.level {
            LogLevel::Info => info!(
                user_id = c.user_id,
                customer_id = c.customer_id,
                order_id = c.order_id,
                order_customer_id = c.order_customer_id,
                item_id = c.item_id,
                "{}",
                entry.message
            ),
            LogLevel::Warn => warn!(
                user_id = c.user_id,
                customer_id = c.customer_id,
                order_id = c.order_id,
                order_customer_id = c.order_customer_id,
                item_id = c.item_id,
                "{}",
                entry.message
            ),
            LogLevel::Error => error!(
                user_id = c.user_id,
                customer_id = c.customer_id,
                order_id = c.order_id,
                order_customer_id = c.order_customer_id,
                item_id = c.item_id,
                "{}",
                entry.message
            ),
        }
    }
}
