// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 负责解析请求参数、调用用例并以纯文本返回结果
pub mod order_handler;
