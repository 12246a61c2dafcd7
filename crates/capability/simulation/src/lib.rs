//! 仿真步进能力
//!
//! 纯函数 `advance`：给定当前机群快照与随机源，计算下一个遥测
//! 快照。对每台非 OFFLINE 设备施加有界随机游走并夹取到合法区间；
//! OFFLINE 设备原样透传（心跳丢失即遥测冻结）。
//!
//! 状态迁移为单向升级：以极低概率把当前状态置为 WARNING，
//! 不建模自动恢复路径。

use domain::{AvDevice, DeviceStatus};
use rand::Rng;

/// 每次 tick 推进的秒数。
pub const TICK_SECONDS: u64 = 5;

/// CPU 负载单次抖动上限（百分点）。
pub const CPU_JITTER: f64 = 2.5;

/// 温度单次抖动上限（°C）。
pub const TEMPERATURE_JITTER: f64 = 0.25;

/// 入向带宽单次抖动上限（Mbps）。
pub const BANDWIDTH_JITTER: f64 = 5.0;

/// 单次 tick 升级为 WARNING 的概率。
pub const WARNING_PROBABILITY: f64 = 0.0005;

/// 步进器的温度下限（°C）。
pub const TEMPERATURE_FLOOR: f64 = 20.0;

/// 推进整个机群一个 tick。
///
/// 每台设备按固定顺序抽取随机增量（CPU、温度、入向带宽、状态），
/// 保证同一播种随机源产生完全一致的结果序列。
pub fn advance<R: Rng>(fleet: &[AvDevice], rng: &mut R) -> Vec<AvDevice> {
    fleet
        .iter()
        .map(|device| advance_device(device, rng))
        .collect()
}

fn advance_device<R: Rng>(device: &AvDevice, rng: &mut R) -> AvDevice {
    // OFFLINE 设备不消耗随机数，遥测逐位不变
    if device.is_offline() {
        return device.clone();
    }

    let cpu_delta = rng.random_range(-CPU_JITTER..CPU_JITTER);
    let temperature_delta = rng.random_range(-TEMPERATURE_JITTER..TEMPERATURE_JITTER);
    let bandwidth_delta = rng.random_range(-BANDWIDTH_JITTER..BANDWIDTH_JITTER);
    let escalate = rng.random_bool(WARNING_PROBABILITY);

    let mut next = device.clone();
    next.cpu_load = (device.cpu_load + cpu_delta).clamp(0.0, 100.0);
    next.temperature = (device.temperature + temperature_delta).max(TEMPERATURE_FLOOR);
    next.bandwidth_in = (device.bandwidth_in + bandwidth_delta).max(0.0);
    next.uptime_seconds = device.uptime_seconds + TICK_SECONDS;
    if escalate {
        next.status = DeviceStatus::Warning;
    }
    next
}
