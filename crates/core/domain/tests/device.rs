use domain::{
    AvDevice, DeviceLog, DeviceStatus, DeviceType, LogLevel, NetworkInterface, OidEntry, OidKind,
    OidValue, PowerState,
};

fn sample_device() -> AvDevice {
    AvDevice {
        id: "DEV-1000".to_string(),
        name: "Control Processor - Conf Room A".to_string(),
        device_type: DeviceType::Controller,
        manufacturer: "Crestron".to_string(),
        model: "CRE-4200".to_string(),
        firmware: "v2.3.41".to_string(),
        serial: "SN7F3K2Q".to_string(),
        location: "Conf Room A".to_string(),
        status: DeviceStatus::Online,
        uptime_seconds: 3600,
        temperature: 42.5,
        cpu_load: 35.0,
        memory_usage: 48.0,
        network: NetworkInterface {
            ip: "192.168.10.100".to_string(),
            mac: "00:1B:44:11:AB:00".to_string(),
            subnet: "255.255.255.0".to_string(),
            gateway: "192.168.10.1".to_string(),
            vlan: 10,
        },
        bandwidth_in: 12.0,
        bandwidth_out: 4.0,
        logs: vec![DeviceLog {
            id: "LOG-1".to_string(),
            timestamp: "2026-08-06T09:00:00Z".to_string(),
            level: LogLevel::Info,
            message: "System startup successful".to_string(),
            code: None,
        }],
        snmp_data: vec![OidEntry {
            oid: "1.3.6.1.2.1.1.5.0".to_string(),
            name: "sysName".to_string(),
            value: OidValue::Text("Control Processor - Conf Room A".to_string()),
            kind: OidKind::String,
        }],
        power_state: PowerState::On,
    }
}

#[test]
fn device_serializes_with_wire_field_names() {
    let device = sample_device();
    let json = serde_json::to_value(&device).expect("serialize");

    assert_eq!(json["type"], "Control Processor");
    assert_eq!(json["status"], "ONLINE");
    assert_eq!(json["powerState"], "ON");
    assert_eq!(json["uptimeSeconds"], 3600);
    assert_eq!(json["snmpData"][0]["type"], "STRING");
    assert_eq!(json["logs"][0]["level"], "INFO");
    // 无厂商错误码时 code 字段省略
    assert!(json["logs"][0].get("code").is_none());
}

#[test]
fn device_round_trips_through_blob_shape() {
    let device = sample_device();
    let payload = serde_json::to_string(&vec![device.clone()]).expect("serialize");
    let decoded: Vec<AvDevice> = serde_json::from_str(&payload).expect("deserialize");
    assert_eq!(decoded, vec![device]);
}

#[test]
fn oid_value_accepts_string_or_integer() {
    let rows: Vec<OidEntry> = serde_json::from_str(
        r#"[
            {"oid":"1.3.6.1.2.1.1.3.0","name":"sysUpTime","value":812345,"type":"TIMETICKS"},
            {"oid":"1.3.6.1.2.1.1.5.0","name":"sysName","value":"DSP-NOC","type":"STRING"}
        ]"#,
    )
    .expect("deserialize");
    assert_eq!(rows[0].value, OidValue::Integer(812345));
    assert_eq!(rows[1].value, OidValue::Text("DSP-NOC".to_string()));
    assert_eq!(rows[0].kind, OidKind::Timeticks);
}
