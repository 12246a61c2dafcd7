//! 遥测生成能力
//!
//! 为设备生成合成遥测基线，不发起任何网络调用：
//! - snmp_baseline：按设备类别生成 SNMP 属性表（通用 4 行 + 类别特定行）
//! - demo_device / demo_fleet：演示机群播种（固定 25 台）
//!
//! 设计约束：
//! - 随机性只来自显式传入的 Rng（播种后可复现）
//! - 时间只来自显式传入的 now（不读系统时钟）

use domain::{
    AvDevice, DeviceLog, DeviceStatus, DeviceType, LogLevel, NetworkInterface, OidEntry, OidKind,
    OidValue, PowerState,
};
use rand::Rng;
use rand::distr::Alphanumeric;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// 演示机群规模。
pub const DEMO_FLEET_SIZE: usize = 25;

/// 演示机群的候选安装位置（按序轮转分配）。
pub const DEMO_LOCATIONS: [&str; 6] = [
    "Conf Room A",
    "Conf Room B",
    "Huddle Space 1",
    "Auditorium",
    "NOC",
    "Exec Boardroom",
];

/// 演示机群的候选厂商。
pub const MANUFACTURERS: [&str; 7] = [
    "Crestron", "Extron", "Q-SYS", "Cisco", "Samsung", "LG", "Biamp",
];

/// 生成设备的 SNMP 属性基线。
///
/// 四行通用条目（sysDescr、sysUpTime、sysName、ifPhysAddress），
/// 显示类设备追加 lampHours/inputSource，DSP 类设备追加
/// audioClipCount/dspLoad。
pub fn snmp_baseline<R: Rng>(device: &AvDevice, rng: &mut R) -> Vec<OidEntry> {
    let mut entries = vec![
        OidEntry {
            oid: "1.3.6.1.2.1.1.1.0".to_string(),
            name: "sysDescr".to_string(),
            value: OidValue::Text(format!(
                "{} {} System OS",
                device.manufacturer, device.model
            )),
            kind: OidKind::String,
        },
        OidEntry {
            oid: "1.3.6.1.2.1.1.3.0".to_string(),
            name: "sysUpTime".to_string(),
            value: OidValue::Integer(rng.random_range(0..9_000_000)),
            kind: OidKind::Timeticks,
        },
        OidEntry {
            oid: "1.3.6.1.2.1.1.5.0".to_string(),
            name: "sysName".to_string(),
            value: OidValue::Text(device.name.clone()),
            kind: OidKind::String,
        },
        OidEntry {
            oid: "1.3.6.1.2.1.2.2.1.6.1".to_string(),
            name: "ifPhysAddress".to_string(),
            value: OidValue::Text(device.network.mac.clone()),
            kind: OidKind::String,
        },
    ];

    match device.device_type {
        DeviceType::Display => {
            entries.push(OidEntry {
                oid: "1.3.6.1.4.1.2021.10.1.3.1".to_string(),
                name: "lampHours".to_string(),
                value: OidValue::Integer(rng.random_range(0..5000)),
                kind: OidKind::Integer,
            });
            entries.push(OidEntry {
                oid: "1.3.6.1.4.1.2021.10.1.3.2".to_string(),
                name: "inputSource".to_string(),
                value: OidValue::Text("HDMI-1".to_string()),
                kind: OidKind::String,
            });
        }
        DeviceType::Dsp => {
            entries.push(OidEntry {
                oid: "1.3.6.1.4.1.9.9.48.1.1.1.5.1".to_string(),
                name: "audioClipCount".to_string(),
                value: OidValue::Integer(0),
                kind: OidKind::Integer,
            });
            entries.push(OidEntry {
                oid: "1.3.6.1.4.1.9.9.48.1.1.1.6.1".to_string(),
                name: "dspLoad".to_string(),
                value: OidValue::Integer(rng.random_range(0..30)),
                kind: OidKind::Integer,
            });
        }
        _ => {}
    }

    entries
}

/// 播种单台演示设备。
///
/// 状态分布：约 10% OFFLINE，其余约 20% WARNING，否则 ONLINE。
/// OFFLINE 设备电源为 OFF 并带心跳丢失日志；WARNING 设备带高
/// CPU 告警日志。`snmp_data` 留空，由存储层在持久化前补齐。
pub fn demo_device<R: Rng>(index: usize, now: OffsetDateTime, rng: &mut R) -> AvDevice {
    let device_type = DeviceType::ALL[rng.random_range(0..DeviceType::ALL.len())];
    let manufacturer = MANUFACTURERS[rng.random_range(0..MANUFACTURERS.len())];
    let location = DEMO_LOCATIONS[index % DEMO_LOCATIONS.len()];

    let is_offline = rng.random_bool(0.1);
    let is_warning = !is_offline && rng.random_bool(0.2);
    let status = if is_offline {
        DeviceStatus::Offline
    } else if is_warning {
        DeviceStatus::Warning
    } else {
        DeviceStatus::Online
    };

    let prefix: String = manufacturer.chars().take(3).collect();
    let serial_tail: String = (0..8).map(|_| rng.sample(Alphanumeric) as char).collect();
    let timestamp = format_rfc3339(now);
    let ts_ms = (now.unix_timestamp_nanos() / 1_000_000) as i64;

    let mut logs = vec![DeviceLog {
        id: format!("LOG-{ts_ms}-1"),
        timestamp: timestamp.clone(),
        level: LogLevel::Info,
        message: "System startup successful".to_string(),
        code: None,
    }];
    if is_warning {
        logs.push(DeviceLog {
            id: format!("LOG-{ts_ms}-2"),
            timestamp: timestamp.clone(),
            level: LogLevel::Warn,
            message: "High CPU utilization detected over 5 minutes".to_string(),
            code: Some("CPU_HIGH_LOAD".to_string()),
        });
    }
    if is_offline {
        logs.push(DeviceLog {
            id: format!("LOG-{ts_ms}-3"),
            timestamp,
            level: LogLevel::Error,
            message: "Heartbeat lost. Connection timed out.".to_string(),
            code: Some("NET_TIMEOUT".to_string()),
        });
    }

    let power_state = if is_offline {
        PowerState::Off
    } else if rng.random_bool(0.2) {
        PowerState::Standby
    } else {
        PowerState::On
    };

    AvDevice {
        id: format!("DEV-{}", 1000 + index),
        name: format!("{} - {}", device_type.label(), location),
        device_type,
        manufacturer: manufacturer.to_string(),
        model: format!("{}-{}", prefix.to_ascii_uppercase(), rng.random_range(0..9000)),
        firmware: format!(
            "v{}.{}.{}",
            rng.random_range(0..5),
            rng.random_range(0..10),
            rng.random_range(0..100)
        ),
        serial: format!("SN{}", serial_tail.to_ascii_uppercase()),
        location: location.to_string(),
        status,
        uptime_seconds: rng.random_range(0..1_000_000),
        temperature: rng.random_range(35.0..55.0),
        cpu_load: rng.random_range(10.0..90.0),
        memory_usage: rng.random_range(20.0..80.0),
        network: NetworkInterface {
            ip: format!("192.168.10.{}", 100 + index),
            mac: format!(
                "00:1B:{:02}:{:02}:AB:{:02}",
                rng.random_range(0..99),
                rng.random_range(0..99),
                index
            ),
            subnet: "255.255.255.0".to_string(),
            gateway: "192.168.10.1".to_string(),
            vlan: 10,
        },
        bandwidth_in: rng.random_range(0.0..100.0),
        bandwidth_out: rng.random_range(0.0..50.0),
        logs,
        snmp_data: Vec::new(),
        power_state,
    }
}

/// 播种完整演示机群（固定 25 台）。
pub fn demo_fleet<R: Rng>(now: OffsetDateTime, rng: &mut R) -> Vec<AvDevice> {
    (0..DEMO_FLEET_SIZE)
        .map(|index| demo_device(index, now, rng))
        .collect()
}

/// RFC 3339 时间戳字符串。
pub fn format_rfc3339(now: OffsetDateTime) -> String {
    now.format(&Rfc3339).unwrap_or_default()
}
