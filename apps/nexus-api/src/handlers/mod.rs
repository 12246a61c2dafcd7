//! Handlers 模块

pub mod devices;
pub mod diagnostics;
pub mod fleet;
pub mod metrics;
pub mod session;
pub mod terminal;

pub use devices::*;
pub use diagnostics::*;
pub use fleet::*;
pub use metrics::*;
pub use session::*;
pub use terminal::*;

use axum::{Json, response::IntoResponse};

/// 健康检查
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
