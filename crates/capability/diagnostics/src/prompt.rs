//! 诊断提示词构造。

use domain::AvDevice;
use std::fmt::Write;

/// 以设备身份、遥测与近期日志构造结构化提示词。
///
/// 未给出用户问题时走通用分析任务。
pub fn build_prompt(device: &AvDevice, question: Option<&str>) -> String {
    let mut logs = String::new();
    for log in &device.logs {
        let code = log
            .code
            .as_deref()
            .map(|code| format!(" (Code: {code})"))
            .unwrap_or_default();
        let level = match log.level {
            domain::LogLevel::Info => "INFO",
            domain::LogLevel::Warn => "WARN",
            domain::LogLevel::Error => "ERROR",
        };
        let _ = writeln!(logs, "[{}] [{}] {}{}", log.timestamp, level, log.message, code);
    }

    let task = match question {
        Some(question) => format!("Answer the user's specific question: \"{question}\""),
        None => "Analyze the device status and logs. Identify any anomalies, potential root \
                 causes, and recommend specific troubleshooting steps (e.g., specific CLI \
                 commands, reboot sequence, cable checks)."
            .to_string(),
    };

    format!(
        "You are Nexus AI, an expert Enterprise AV Network Engineer and Systems Integrator.\n\
         Your goal is to diagnose issues with Audio-Visual equipment based on telemetry data.\n\
         \n\
         Current Device Telemetry:\n\
         - ID: {id}\n\
         - Name: {name}\n\
         - Model: {manufacturer} {model}\n\
         - Firmware: {firmware}\n\
         - Status: {status}\n\
         - Power: {power}\n\
         - Uptime: {uptime:.1} hours\n\
         - Temperature: {temperature:.1}°C\n\
         - CPU Load: {cpu:.1}%\n\
         - Memory: {memory:.1}%\n\
         - Network: IP {ip} / MAC {mac}\n\
         \n\
         Recent Logs:\n\
         {logs}\n\
         Task:\n\
         {task}\n\
         \n\
         Keep the tone professional, technical but accessible, and concise. Format with Markdown.",
        id = device.id,
        name = device.name,
        manufacturer = device.manufacturer,
        model = device.model,
        firmware = device.firmware,
        status = device.status,
        power = device.power_state,
        uptime = device.uptime_seconds as f64 / 3600.0,
        temperature = device.temperature,
        cpu = device.cpu_load,
        memory = device.memory_usage,
        ip = device.network.ip,
        mac = device.network.mac,
        logs = logs,
        task = task,
    )
}
