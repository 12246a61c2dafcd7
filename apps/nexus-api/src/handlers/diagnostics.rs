//! 诊断 handler
//!
//! - POST /devices/{id}/diagnose
//!
//! 调用生成式 AI 协作方分析设备。协作方失败在此本地恢复为
//! 面向用户的占位消息，绝不向调用方上抛 5xx。

use crate::AppState;
use crate::handlers::devices::DevicePath;
use crate::utils::response::not_found_error;
use api_contract::{ApiResponse, DiagnoseRequest, DiagnoseResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nexus_diagnostics::DiagnosticsError;
use nexus_telemetry::{record_diagnostics_failure, record_diagnostics_request};
use tracing::warn;

/// 未配置凭证时的占位消息。
const MISSING_KEY_NOTICE: &str =
    "Error: API Key is missing. Please check your environment configuration.";

/// 协作方调用失败时的占位消息。
const ANALYSIS_FAILED_NOTICE: &str =
    "Failed to run diagnostic analysis. Please check network connection and API key.";

/// 诊断设备
pub async fn diagnose_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
    Json(req): Json<DiagnoseRequest>,
) -> Response {
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

    record_diagnostics_request();
    let analysis = match state
        .diagnostics
        .diagnose(&device, req.question.as_deref())
        .await
    {
        Ok(text) => text,
        Err(DiagnosticsError::MissingCredential) => {
            record_diagnostics_failure();
            MISSING_KEY_NOTICE.to_string()
        }
        Err(err) => {
            record_diagnostics_failure();
            warn!(target: "nexus.diagnostics", device_id = %device.id, error = %err, "diagnose_failed");
            ANALYSIS_FAILED_NOTICE.to_string()
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(DiagnoseResponse { analysis })),
    )
        .into_response()
}
