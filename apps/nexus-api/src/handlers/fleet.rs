//! 机群级 handlers
//!
//! - POST /fleet/reset - 重置为演示机群
//! - POST /fleet/clear - 清空机群
//!
//! 两个操作都无条件清除会话焦点并返回完整机群。

use crate::AppState;
use crate::utils::response::storage_error;
use api_contract::ApiResponse;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nexus_telemetry::{record_fleet_clear, record_fleet_reset};
use tracing::info;

/// 重置为演示机群
pub async fn reset_fleet(State(state): State<AppState>) -> Response {
    let mut session = state.session.lock().await;
    match session.reset_to_demo().await {
        Ok(fleet) => {
            record_fleet_reset();
            info!(target: "nexus.fleet", fleet_size = fleet.len(), "fleet_reset");
            (StatusCode::OK, Json(ApiResponse::success(fleet.to_vec()))).into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 清空机群
pub async fn clear_fleet(State(state): State<AppState>) -> Response {
    let mut session = state.session.lock().await;
    match session.clear_all().await {
        Ok(fleet) => {
            record_fleet_clear();
            info!(target: "nexus.fleet", "fleet_cleared");
            (StatusCode::OK, Json(ApiResponse::success(fleet.to_vec()))).into_response()
        }
        Err(err) => storage_error(err),
    }
}
