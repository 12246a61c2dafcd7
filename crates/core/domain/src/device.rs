//! 设备领域模型
//!
//! 定义 AV 设备聚合根及其嵌套结构：
//! - 设备模型：AvDevice（状态、电源、遥测、网络接口）
//! - 日志模型：DeviceLog（只追加，不删除不排序）
//! - SNMP 模型：OidEntry（合成 SNMP 属性行）
//!
//! 序列化约定：
//! - 字段名 camelCase（与持久化 blob 及 API 响应一致）
//! - 枚举值全大写字符串（ONLINE、OFF、TIMETICKS 等）

use serde::{Deserialize, Serialize};

/// 设备运行状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceStatus {
    Online,
    Offline,
    Warning,
    Critical,
    Maintenance,
}

impl DeviceStatus {
    /// 返回状态的协议字符串表示。
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "ONLINE",
            DeviceStatus::Offline => "OFFLINE",
            DeviceStatus::Warning => "WARNING",
            DeviceStatus::Critical => "CRITICAL",
            DeviceStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 设备电源状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    On,
    Off,
    Standby,
}

impl PowerState {
    /// 返回电源状态的协议字符串表示。
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerState::On => "ON",
            PowerState::Off => "OFF",
            PowerState::Standby => "STANDBY",
        }
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 设备类别。
///
/// 序列化值为人类可读标签（与持久化 blob 中的历史取值保持一致）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "Control Processor")]
    Controller,
    #[serde(rename = "Display/Projector")]
    Display,
    #[serde(rename = "Video Matrix")]
    Matrix,
    #[serde(rename = "Audio DSP")]
    Dsp,
    #[serde(rename = "VC Codec")]
    Codec,
    #[serde(rename = "Touch Panel")]
    TouchPanel,
    #[serde(rename = "Network Switch")]
    NetworkSwitch,
    #[serde(rename = "Lighting Gateway")]
    Lighting,
    #[serde(rename = "Shade Controller")]
    Shade,
    #[serde(rename = "Generic IoT")]
    Other,
}

impl DeviceType {
    /// 全部设备类别（用于演示机群播种时随机抽取）。
    pub const ALL: [DeviceType; 10] = [
        DeviceType::Controller,
        DeviceType::Display,
        DeviceType::Matrix,
        DeviceType::Dsp,
        DeviceType::Codec,
        DeviceType::TouchPanel,
        DeviceType::NetworkSwitch,
        DeviceType::Lighting,
        DeviceType::Shade,
        DeviceType::Other,
    ];

    /// 返回类别的人类可读标签。
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Controller => "Control Processor",
            DeviceType::Display => "Display/Projector",
            DeviceType::Matrix => "Video Matrix",
            DeviceType::Dsp => "Audio DSP",
            DeviceType::Codec => "VC Codec",
            DeviceType::TouchPanel => "Touch Panel",
            DeviceType::NetworkSwitch => "Network Switch",
            DeviceType::Lighting => "Lighting Gateway",
            DeviceType::Shade => "Shade Controller",
            DeviceType::Other => "Generic IoT",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 设备网络接口（字段不做格式校验，视为不透明值）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub ip: String,
    pub mac: String,
    pub subnet: String,
    pub gateway: String,
    pub vlan: u16,
}

/// 设备日志级别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// 设备日志条目。
///
/// 日志序列只追加：不删除、不重排。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceLog {
    pub id: String,
    /// RFC 3339 时间戳。
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    /// 厂商错误码（可选）。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// OID 值（字符串或整数）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OidValue {
    Integer(i64),
    Text(String),
}

/// OID 值的类型标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OidKind {
    String,
    Integer,
    Timeticks,
    IpAddress,
}

/// 合成 SNMP 属性行。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OidEntry {
    pub oid: String,
    pub name: String,
    pub value: OidValue,
    #[serde(rename = "type")]
    pub kind: OidKind,
}

/// AV 设备聚合根。
///
/// `id` 在机群内唯一，创建后不可变。遥测字段的取值约束：
/// - `cpu_load`、`memory_usage` 限制在 [0, 100]
/// - `temperature` 由步进器下限 20°C
/// - `bandwidth_in`、`bandwidth_out` 非负
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvDevice {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub manufacturer: String,
    pub model: String,
    pub firmware: String,
    pub serial: String,
    pub location: String,
    pub status: DeviceStatus,
    pub uptime_seconds: u64,
    /// 摄氏度。
    pub temperature: f64,
    /// 百分比。
    pub cpu_load: f64,
    /// 百分比。
    pub memory_usage: f64,
    pub network: NetworkInterface,
    /// Mbps。
    pub bandwidth_in: f64,
    /// Mbps。
    pub bandwidth_out: f64,
    pub logs: Vec<DeviceLog>,
    pub snmp_data: Vec<OidEntry>,
    pub power_state: PowerState,
}

impl AvDevice {
    /// OFFLINE 设备遥测冻结（步进器不得改动）。
    pub fn is_offline(&self) -> bool {
        self.status == DeviceStatus::Offline
    }
}
