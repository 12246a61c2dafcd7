//! HTTP 响应辅助函数
//!
//! 提供统一的错误响应构造函数：
//! - 错误响应：bad_request_error, not_found_error, storage_error
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应
//! - 存储失败对触发操作致命：不掩盖、不回退默认值

use api_contract::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nexus_session::SessionError;

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// 存储层错误响应（持久化失败向调用方透传）
pub fn storage_error(err: SessionError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error("STORAGE.ERROR", err.to_string())),
    )
        .into_response()
}
