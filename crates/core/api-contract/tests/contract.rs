use api_contract::{CreateDeviceRequest, SessionStateDto};
use domain::DeviceType;

#[test]
fn create_device_request_uses_wire_type_labels() {
    let req: CreateDeviceRequest = serde_json::from_str(
        r#"{
            "name": "Lobby Display",
            "type": "Display/Projector",
            "manufacturer": "Samsung",
            "model": "QM85",
            "location": "Lobby",
            "ip": "192.168.10.210"
        }"#,
    )
    .expect("deserialize");
    assert_eq!(req.device_type, DeviceType::Display);
    assert_eq!(req.name, "Lobby Display");
}

#[test]
fn session_state_serializes_camel_case() {
    let dto = SessionStateDto {
        view: "device".to_string(),
        focused_device_id: Some("DEV-1003".to_string()),
        fleet_size: 25,
    };
    let json = serde_json::to_value(&dto).expect("serialize");
    assert_eq!(json["focusedDeviceId"], "DEV-1003");
    assert_eq!(json["fleetSize"], 25);
}
