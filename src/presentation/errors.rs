// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::application::use_cases::order_interactor::OrderInteractorError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一转换为纯文本响应
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<OrderInteractorError>() {
            return match err {
                OrderInteractorError::Authorization(_) => StatusCode::FORBIDDEN,
                OrderInteractorError::BusinessRuleViolation { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                OrderInteractorError::NotFound { .. } => StatusCode::NOT_FOUND,
                OrderInteractorError::Conflict(_) => StatusCode::CONFLICT,
                OrderInteractorError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        if self.0.downcast_ref::<ValidationErrors>().is_some() {
            return StatusCode::BAD_REQUEST;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        }
        (status, format!("{}\n", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
