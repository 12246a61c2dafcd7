use domain::DeviceStatus;
use nexus_generator::demo_fleet;
use nexus_simulation::{TEMPERATURE_FLOOR, TICK_SECONDS, advance};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::OffsetDateTime;

fn seeded_fleet(seed: u64) -> Vec<domain::AvDevice> {
    let now = OffsetDateTime::from_unix_timestamp(1_754_000_000).expect("timestamp");
    let mut rng = StdRng::seed_from_u64(seed);
    demo_fleet(now, &mut rng)
}

#[test]
fn telemetry_stays_within_bounds() {
    let mut fleet = seeded_fleet(17);
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..1000 {
        fleet = advance(&fleet, &mut rng);
    }

    for device in &fleet {
        assert!((0.0..=100.0).contains(&device.cpu_load), "cpu {}", device.cpu_load);
        assert!(
            (0.0..=100.0).contains(&device.memory_usage),
            "memory {}",
            device.memory_usage
        );
        assert!(device.temperature >= TEMPERATURE_FLOOR, "temp {}", device.temperature);
        assert!(device.bandwidth_in >= 0.0, "bandwidth {}", device.bandwidth_in);
    }
}

#[test]
fn offline_devices_are_frozen() {
    let mut fleet = seeded_fleet(23);
    // 前三台强制置为 OFFLINE，模拟心跳丢失
    for device in fleet.iter_mut().take(3) {
        device.status = DeviceStatus::Offline;
    }
    let offline_before: Vec<domain::AvDevice> = fleet.iter().take(3).cloned().collect();

    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..500 {
        fleet = advance(&fleet, &mut rng);
    }

    let offline_after: Vec<domain::AvDevice> = fleet.iter().take(3).cloned().collect();
    assert_eq!(offline_before, offline_after);
}

#[test]
fn advance_is_deterministic_for_a_seed() {
    let fleet = seeded_fleet(42);

    let mut first_rng = StdRng::seed_from_u64(1234);
    let mut second_rng = StdRng::seed_from_u64(1234);
    let mut first = fleet.clone();
    let mut second = fleet;
    for _ in 0..1000 {
        first = advance(&first, &mut first_rng);
        second = advance(&second, &mut second_rng);
    }

    assert_eq!(first, second);
}

#[test]
fn uptime_advances_by_tick_length_for_running_devices() {
    let fleet = seeded_fleet(5);
    let mut rng = StdRng::seed_from_u64(6);
    let next = advance(&fleet, &mut rng);

    for (before, after) in fleet.iter().zip(next.iter()) {
        if before.is_offline() {
            assert_eq!(before.uptime_seconds, after.uptime_seconds);
        } else {
            assert_eq!(before.uptime_seconds + TICK_SECONDS, after.uptime_seconds);
        }
    }
}

#[test]
fn status_escalation_is_one_way() {
    // 长时间仿真后：WARNING 只会增加，绝不回落为 ONLINE，
    // OFFLINE 设备永远不会被重新拉起
    let mut fleet = seeded_fleet(77);
    let mut rng = StdRng::seed_from_u64(8);

    let mut warned: Vec<String> = Vec::new();
    for _ in 0..5000 {
        fleet = advance(&fleet, &mut rng);
        for device in &fleet {
            if device.status == DeviceStatus::Warning && !warned.contains(&device.id) {
                warned.push(device.id.clone());
            }
        }
        for id in &warned {
            let device = fleet.iter().find(|device| &device.id == id).expect("device");
            assert_eq!(device.status, DeviceStatus::Warning);
        }
    }
}
