//! 稳定的 DTO 与 API 响应契约。

use domain::DeviceType;
use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 手动录入设备请求体。
///
/// 仅包含操作员可填写的描述字段；遥测字段由服务端按
/// “新增即在线、遥测零值”的约定补齐。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub manufacturer: String,
    pub model: String,
    pub location: String,
    pub ip: String,
}

/// 终端命令请求体。
#[derive(Debug, Deserialize)]
pub struct TerminalCommandRequest {
    pub command: String,
}

/// 终端命令响应体。
#[derive(Debug, Serialize)]
pub struct TerminalCommandResponse {
    pub output: String,
}

/// 诊断分析请求体（问题可选，缺省走通用诊断）。
#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    #[serde(default)]
    pub question: Option<String>,
}

/// 诊断分析响应体。
#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    pub analysis: String,
}

/// 会话状态响应体。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateDto {
    /// 当前视图："fleet" 或 "device"。
    pub view: String,
    pub focused_device_id: Option<String>,
    pub fleet_size: usize,
}

/// Telemetry 指标快照 DTO。
#[derive(Debug, Serialize)]
pub struct MetricsSnapshotDto {
    pub ticks_processed: u64,
    pub devices_advanced: u64,
    pub devices_added: u64,
    pub fleet_resets: u64,
    pub fleet_clears: u64,
    pub commands_processed: u64,
    pub command_latency_ms_total: u64,
    pub command_latency_ms_count: u64,
    pub diagnostics_requests: u64,
    pub diagnostics_failures: u64,
}
