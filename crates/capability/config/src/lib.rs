//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    /// 机群快照 JSON 文件路径。
    pub data_path: String,
    /// 仿真轮询周期（秒）。
    pub poll_interval_seconds: u64,
    /// 终端命令人工延迟基值（毫秒）。
    pub terminal_latency_base_ms: u64,
    /// 终端命令人工延迟抖动上限（毫秒）。
    pub terminal_latency_jitter_ms: u64,
    /// 仿真随机种子；缺省取系统熵。
    pub simulation_seed: Option<u64>,
    /// 诊断服务 API 密钥；缺省时诊断端点返回占位消息。
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("NEXUS_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let data_path = env::var("NEXUS_DATA_PATH")
            .unwrap_or_else(|_| "data/nexus_av_devices.json".to_string());
        let poll_interval_seconds = read_u64_with_default("NEXUS_POLL_INTERVAL_SECONDS", 5)?;
        let terminal_latency_base_ms = read_u64_with_default("NEXUS_TERMINAL_LATENCY_BASE_MS", 400)?;
        let terminal_latency_jitter_ms =
            read_u64_with_default("NEXUS_TERMINAL_LATENCY_JITTER_MS", 600)?;
        let simulation_seed = read_optional_u64("NEXUS_SIMULATION_SEED")?;
        let gemini_api_key = read_optional("NEXUS_GEMINI_API_KEY");
        let gemini_model = env::var("NEXUS_GEMINI_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash-latest".to_string());

        Ok(Self {
            http_addr,
            data_path,
            poll_interval_seconds,
            terminal_latency_base_ms,
            terminal_latency_jitter_ms,
            simulation_seed,
            gemini_api_key,
            gemini_model,
        })
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn read_optional_u64(key: &str) -> Result<Option<u64>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(key.to_string(), value)),
        Err(_) => Ok(None),
    }
}
