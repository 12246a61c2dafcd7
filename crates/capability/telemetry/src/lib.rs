//! 追踪与请求 ID 生成。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
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

/// 基础指标。
pub struct TelemetryMetrics {
    ticks_processed: AtomicU64,
    devices_advanced: AtomicU64,
    devices_added: AtomicU64,
    fleet_resets: AtomicU64,
    fleet_clears: AtomicU64,
    commands_processed: AtomicU64,
    command_latency_ms_total: AtomicU64,
    command_latency_ms_count: AtomicU64,
    diagnostics_requests: AtomicU64,
    diagnostics_failures: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            ticks_processed: AtomicU64::new(0),
            devices_advanced: AtomicU64::new(0),
            devices_added: AtomicU64::new(0),
            fleet_resets: AtomicU64::new(0),
            fleet_clears: AtomicU64::new(0),
            commands_processed: AtomicU64::new(0),
            command_latency_ms_total: AtomicU64::new(0),
            command_latency_ms_count: AtomicU64::new(0),
            diagnostics_requests: AtomicU64::new(0),
            diagnostics_failures: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            ticks_processed: self.ticks_processed.load(Ordering::Relaxed),
            devices_advanced: self.devices_advanced.load(Ordering::Relaxed),
            devices_added: self.devices_added.load(Ordering::Relaxed),
            fleet_resets: self.fleet_resets.load(Ordering::Relaxed),
            fleet_clears: self.fleet_clears.load(Ordering::Relaxed),
            commands_processed: self.commands_processed.load(Ordering::Relaxed),
            command_latency_ms_total: self.command_latency_ms_total.load(Ordering::Relaxed),
            command_latency_ms_count: self.command_latency_ms_count.load(Ordering::Relaxed),
            diagnostics_requests: self.diagnostics_requests.load(Ordering::Relaxed),
            diagnostics_failures: self.diagnostics_failures.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录一次仿真 tick 及其推进的设备数。
pub fn record_tick(devices: u64) {
    let metrics = metrics();
    metrics.ticks_processed.fetch_add(1, Ordering::Relaxed);
    metrics.devices_advanced.fetch_add(devices, Ordering::Relaxed);
}

/// 记录一次手动录入设备。
pub fn record_device_added() {
    metrics().devices_added.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次机群重置。
pub fn record_fleet_reset() {
    metrics().fleet_resets.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次机群清空。
pub fn record_fleet_clear() {
    metrics().fleet_clears.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次终端命令处理及其耗时（毫秒）。
pub fn record_command_processed(latency_ms: u64) {
    let metrics = metrics();
    metrics.commands_processed.fetch_add(1, Ordering::Relaxed);
    metrics
        .command_latency_ms_total
        .fetch_add(latency_ms, Ordering::Relaxed);
    metrics
        .command_latency_ms_count
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录一次诊断请求。
pub fn record_diagnostics_request() {
    metrics().diagnostics_requests.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次诊断失败（本地恢复为占位消息的场景）。
pub fn record_diagnostics_failure() {
    metrics().diagnostics_failures.fetch_add(1, Ordering::Relaxed);
}
