//! 终端命令 handler
//!
//! - POST /devices/{id}/terminal
//!
//! 针对设备当前快照执行只读命令查询。解释器带人工延迟；
//! 并发提交的命令在延迟随机源的锁上排队串行执行（进行中的
//! 命令不支持取消）。

use crate::AppState;
use crate::handlers::devices::DevicePath;
use crate::utils::response::{bad_request_error, not_found_error};
use api_contract::{ApiResponse, TerminalCommandRequest, TerminalCommandResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nexus_telemetry::record_command_processed;
use std::time::Instant;
use tracing::info;

/// 执行终端命令
pub async fn run_terminal_command(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
    Json(req): Json<TerminalCommandRequest>,
) -> Response {
    if req.command.trim().is_empty() {
        return bad_request_error("command is required");
    }

    // 取快照后立即释放会话锁：命令解释不阻塞轮询 tick
    let device = {
        let session = state.session.lock().await;
        session
            .fleet()
            .iter()
            .find(|device| device.id == path.device_id)
            .cloned()
    };
    let Some(device) = device else {
        return not_found_error();
    };

    let started = Instant::now();
    let output = {
        let mut rng = state.command_rng.lock().await;
        state
            .interpreter
            .interpret(&device, &req.command, &mut *rng)
            .await
    };
    let latency_ms = started.elapsed().as_millis() as u64;
    record_command_processed(latency_ms);
    info!(
        target: "nexus.terminal",
        device_id = %device.id,
        latency_ms,
        "command_processed"
    );

    (
        StatusCode::OK,
        Json(ApiResponse::success(TerminalCommandResponse { output })),
    )
        .into_response()
}
