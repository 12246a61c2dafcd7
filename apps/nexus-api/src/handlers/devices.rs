//! 设备 handlers
//!
//! 提供机群与单台设备的查询及手动录入接口：
//! - GET /devices - 列出机群
//! - POST /devices - 手动录入设备
//! - GET /devices/{id} - 获取设备详情
//!
//! 约定：
//! - 所有变更操作返回完整机群（绝不返回增量）
//! - 手动录入的设备默认 ONLINE，遥测取录入基线值

use crate::AppState;
use crate::utils::response::{bad_request_error, not_found_error, storage_error};
use api_contract::{ApiResponse, CreateDeviceRequest};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{
    AvDevice, DeviceLog, DeviceStatus, LogLevel, NetworkInterface, PowerState,
};
use nexus_telemetry::record_device_added;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(serde::Deserialize)]
pub struct DevicePath {
    pub device_id: String,
}

/// 列出机群
///
/// 返回当前会话的完整机群工作副本。
///
/// # 返回
///
/// 成功时返回 `200 OK` 和设备列表。
pub async fn list_devices(State(state): State<AppState>) -> Response {
    let session = state.session.lock().await;
    (
        StatusCode::OK,
        Json(ApiResponse::success(session.fleet().to_vec())),
    )
        .into_response()
}

/// 获取设备详情
///
/// 按 id 在当前机群工作副本中查找设备。
///
/// # 错误处理
///
/// - `404 NOT FOUND`: id 不在机群中
pub async fn get_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
) -> Response {
    let session = state.session.lock().await;
    match session
        .fleet()
        .iter()
        .find(|device| device.id == path.device_id)
    {
        Some(device) => (
            StatusCode::OK,
            Json(ApiResponse::success(device.clone())),
        )
            .into_response(),
        None => not_found_error(),
    }
}

/// 手动录入设备
///
/// 以操作员填写的描述字段构造设备，补齐默认遥测基线后经由
/// 会话协调器写入仓库。
///
/// # 流程
///
/// 1. 校验必填显示字段非空
/// 2. 构造 ONLINE 状态的设备（遥测取录入基线值）
/// 3. 调用 `session.add_device` 头插并持久化
/// 4. 返回完整机群
///
/// # 错误处理
///
/// - `400 BAD REQUEST`: 必填字段为空
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn create_device(
    State(state): State<AppState>,
    Json(req): Json<CreateDeviceRequest>,
) -> Response {
    if req.name.trim().is_empty()
        || req.manufacturer.trim().is_empty()
        || req.model.trim().is_empty()
    {
        return bad_request_error("name, manufacturer and model are required");
    }

    let device = manual_device(req);
    let mut session = state.session.lock().await;
    match session.add_device(device).await {
        Ok(fleet) => {
            record_device_added();
            (
                StatusCode::OK,
                Json(ApiResponse::success(fleet.to_vec())),
            )
                .into_response()
        }
        Err(err) => storage_error(err),
    }
}

/// 手动录入设备的默认形态。
fn manual_device(req: CreateDeviceRequest) -> AvDevice {
    let now = OffsetDateTime::now_utc();
    let ts_ms = (now.unix_timestamp_nanos() / 1_000_000) as i64;
    let timestamp = now.format(&Rfc3339).unwrap_or_default();

    AvDevice {
        id: format!("MANUAL-{ts_ms}"),
        name: req.name,
        device_type: req.device_type,
        manufacturer: req.manufacturer,
        model: req.model,
        firmware: "1.0.0".to_string(),
        serial: "MANUAL_ENTRY".to_string(),
        location: req.location,
        status: DeviceStatus::Online,
        uptime_seconds: 0,
        temperature: 40.0,
        cpu_load: 10.0,
        memory_usage: 25.0,
        network: NetworkInterface {
            ip: req.ip,
            mac: "00:00:00:00:00:00".to_string(),
            subnet: "255.255.255.0".to_string(),
            gateway: "192.168.1.1".to_string(),
            vlan: 1,
        },
        bandwidth_in: 0.0,
        bandwidth_out: 0.0,
        logs: vec![DeviceLog {
            id: format!("LOG-{}", uuid::Uuid::new_v4()),
            timestamp,
            level: LogLevel::Info,
            message: "Device manually added to inventory.".to_string(),
            code: None,
        }],
        snmp_data: Vec::new(),
        power_state: PowerState::On,
    }
}
