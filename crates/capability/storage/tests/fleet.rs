use domain::{AvDevice, DeviceStatus, DeviceType, NetworkInterface, PowerState};
use nexus_generator::DEMO_FLEET_SIZE;
use nexus_storage::{FleetRepository, InMemoryStateStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

fn repository(seed: u64) -> FleetRepository {
    FleetRepository::with_rng(
        Arc::new(InMemoryStateStore::new()),
        StdRng::seed_from_u64(seed),
    )
}

fn manual_device(id: &str) -> AvDevice {
    AvDevice {
        id: id.to_string(),
        name: "Rack DSP".to_string(),
        device_type: DeviceType::Dsp,
        manufacturer: "Biamp".to_string(),
        model: "TesiraFORTE".to_string(),
        firmware: "1.0.0".to_string(),
        serial: "MANUAL_ENTRY".to_string(),
        location: "NOC".to_string(),
        status: DeviceStatus::Online,
        uptime_seconds: 0,
        temperature: 40.0,
        cpu_load: 10.0,
        memory_usage: 25.0,
        network: NetworkInterface {
            ip: "192.168.1.50".to_string(),
            mac: "00:00:00:00:00:00".to_string(),
            subnet: "255.255.255.0".to_string(),
            gateway: "192.168.1.1".to_string(),
            vlan: 1,
        },
        bandwidth_in: 0.0,
        bandwidth_out: 0.0,
        logs: Vec::new(),
        snmp_data: Vec::new(),
        power_state: PowerState::On,
    }
}

#[tokio::test]
async fn cold_start_seeds_and_load_is_idempotent() {
    let repo = repository(1);
    let first = repo.load().await.expect("first load");
    let second = repo.load().await.expect("second load");

    assert_eq!(first.len(), DEMO_FLEET_SIZE);
    assert_eq!(first, second);
}

#[tokio::test]
async fn add_prepends_device_with_generated_baseline() {
    let repo = repository(2);
    let returned = repo.add(manual_device("MANUAL-1")).await.expect("add");

    assert_eq!(returned.len(), DEMO_FLEET_SIZE + 1);
    assert_eq!(returned[0].id, "MANUAL-1");
    assert!(!returned[0].snmp_data.is_empty());

    let loaded = repo.load().await.expect("load");
    let hits = loaded
        .iter()
        .filter(|device| device.id == "MANUAL-1")
        .count();
    assert_eq!(hits, 1);
    // read-your-writes：返回值与随后的 load 一致
    assert_eq!(returned, loaded);
}

#[tokio::test]
async fn update_replaces_matching_device() {
    let repo = repository(3);
    let fleet = repo.load().await.expect("load");

    let mut changed = fleet[3].clone();
    changed.status = DeviceStatus::Maintenance;
    let returned = repo.update(changed.clone()).await.expect("update");

    let slot = returned
        .iter()
        .find(|device| device.id == changed.id)
        .expect("updated device");
    assert_eq!(slot.status, DeviceStatus::Maintenance);
    assert_eq!(returned.len(), fleet.len());
}

#[tokio::test]
async fn update_with_unknown_id_is_a_silent_noop() {
    let repo = repository(4);
    let fleet = repo.load().await.expect("load");

    let returned = repo
        .update(manual_device("DEV-9999"))
        .await
        .expect("update");
    assert_eq!(returned, fleet);
}

#[tokio::test]
async fn remove_deletes_matching_device_and_ignores_unknown() {
    let repo = repository(5);
    let fleet = repo.load().await.expect("load");
    let victim = fleet[0].id.clone();

    let returned = repo.remove(&victim).await.expect("remove");
    assert_eq!(returned.len(), fleet.len() - 1);
    assert!(returned.iter().all(|device| device.id != victim));

    let unchanged = repo.remove("DEV-9999").await.expect("remove unknown");
    assert_eq!(unchanged, returned);
}

#[tokio::test]
async fn clear_all_persists_an_empty_fleet() {
    let repo = repository(6);
    repo.load().await.expect("seed");

    let cleared = repo.clear_all().await.expect("clear");
    assert!(cleared.is_empty());
    assert!(repo.load().await.expect("load").is_empty());
}

#[tokio::test]
async fn reset_to_demo_reseeds_with_generated_baselines() {
    let repo = repository(7);
    repo.clear_all().await.expect("clear");

    let fleet = repo.reset_to_demo().await.expect("reset");
    assert_eq!(fleet.len(), DEMO_FLEET_SIZE);
    for device in &fleet {
        assert!(!device.snmp_data.is_empty(), "device {} has no baseline", device.id);
    }
}

#[tokio::test]
async fn corrupted_blob_surfaces_an_error() {
    let repo = FleetRepository::with_rng(
        Arc::new(InMemoryStateStore::with_payload("{not valid json")),
        StdRng::seed_from_u64(8),
    );
    // 损坏的 blob 不得被静默当作冷启动重新播种
    assert!(repo.load().await.is_err());
}
