// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 包含应用程序的所有业务用例实现
/// 订单用例负责查看与修改订单时的授权判断，并委托领域模型执行业务规则
pub mod modify_policy;
pub mod order_interactor;
