// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 将 HTTP 请求转换为用例调用，并把结果渲染为纯文本
pub mod errors;
pub mod handlers;
pub mod routes;
