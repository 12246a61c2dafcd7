//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 指标快照：/metrics
//! - 机群管理：/devices/*、/fleet/reset、/fleet/clear
//! - 会话焦点：/session/*
//! - 设备查询面：/devices/{id}/terminal、/devices/{id}/diagnose

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router，支持 / 和 /api/ 两种前缀
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/devices", get(list_devices).post(create_device))
        .route("/devices/:device_id", get(get_device))
        .route("/devices/:device_id/terminal", post(run_terminal_command))
        .route("/devices/:device_id/diagnose", post(diagnose_device))
        .route("/fleet/reset", post(reset_fleet))
        .route("/fleet/clear", post(clear_fleet))
        .route("/session", get(get_session))
        .route("/session/focus/:device_id", post(focus_device))
        .route("/session/back", post(back_to_fleet))
}
