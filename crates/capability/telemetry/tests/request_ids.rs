use nexus_telemetry::{new_request_ids, record_tick};

#[test]
fn request_ids_non_empty() {
    let ids = new_request_ids();
    assert!(!ids.request_id.is_empty());
    assert!(!ids.trace_id.is_empty());
}

#[test]
fn tick_counters_advance() {
    let before = nexus_telemetry::metrics().snapshot();
    record_tick(25);
    let after = nexus_telemetry::metrics().snapshot();
    assert_eq!(after.ticks_processed, before.ticks_processed + 1);
    assert_eq!(after.devices_advanced, before.devices_advanced + 25);
}
