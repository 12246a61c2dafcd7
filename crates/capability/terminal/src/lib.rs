//! 终端命令能力
//!
//! 把操作员输入的自由文本命令映射为对设备当前快照的合成文本
//! 响应。厂商方言按 manufacturer 子串匹配（crestron / q-sys），
//! 其余走通用命令表。
//!
//! 只读查询面：不改动设备状态。异步仅用于模拟网络延迟
//! （固定基值 + 随机抖动的单个挂起点），不做真实 I/O。

use domain::AvDevice;
use rand::Rng;
use std::time::Duration;

/// 终端延迟配置。
///
/// 测试场景把两个值都置 0 可完全关闭人工延迟。
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// 延迟固定基值（毫秒）。
    pub latency_base_ms: u64,
    /// 延迟随机抖动上限（毫秒）。
    pub latency_jitter_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            latency_base_ms: 400,
            latency_jitter_ms: 600,
        }
    }
}

impl TerminalConfig {
    /// 零延迟配置（测试用）。
    pub fn instant() -> Self {
        Self {
            latency_base_ms: 0,
            latency_jitter_ms: 0,
        }
    }
}

/// 厂商方言命令解释器。
pub struct Interpreter {
    config: TerminalConfig,
}

impl Interpreter {
    pub fn new(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// 解释一条命令并返回合成响应。
    ///
    /// 进行中的命令不支持取消；并发提交由调用方排队串行化。
    pub async fn interpret<R: Rng + Send>(
        &self,
        device: &AvDevice,
        command: &str,
        rng: &mut R,
    ) -> String {
        let jitter = if self.config.latency_jitter_ms > 0 {
            rng.random_range(0..self.config.latency_jitter_ms)
        } else {
            0
        };
        let delay = self.config.latency_base_ms + jitter;
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        respond(device, command)
    }
}

/// 命令到响应文本的纯映射（大小写不敏感，首尾空白忽略）。
pub fn respond(device: &AvDevice, command: &str) -> String {
    let cmd = command.trim().to_lowercase();

    if cmd == "help" || cmd == "?" {
        let manufacturer = device.manufacturer.to_lowercase();
        if manufacturer.contains("crestron") {
            return "Available commands: HELP, PROGCOMMENTS, REBOOT, RESTORE, STATUS, UPTIME, VER, WHO"
                .to_string();
        }
        if manufacturer.contains("q-sys") {
            return "Commands: sg (Get Status), ss (Set Status), gip (Get IP), reboot (Reboot System)"
                .to_string();
        }
        return "Available commands: help, status, uptime, reboot, network".to_string();
    }

    if cmd == "reboot" {
        return "System is rebooting... Connection will be lost.".to_string();
    }

    if cmd == "uptime" {
        return format!(
            "System Up: {:.1} hours",
            device.uptime_seconds as f64 / 3600.0
        );
    }

    if cmd == "status" || cmd == "sg" {
        return format!(
            "System Status: {}\nCPU Load: {:.1}%\nTemperature: {:.1}C\nMemory Free: {:.1}%",
            device.status,
            device.cpu_load,
            device.temperature,
            100.0 - device.memory_usage
        );
    }

    if cmd == "ver" {
        return format!(
            "Firmware Version: {}\nBuild Date: 2024-10-15",
            device.firmware
        );
    }

    format!("Error: Command '{command}' not recognized.")
}
