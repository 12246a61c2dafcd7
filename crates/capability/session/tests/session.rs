use nexus_session::{SessionCoordinator, SessionView};
use nexus_storage::{FleetRepository, InMemoryStateStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

async fn coordinator(seed: u64) -> (SessionCoordinator, Arc<FleetRepository>) {
    let store = Arc::new(FleetRepository::with_rng(
        Arc::new(InMemoryStateStore::new()),
        StdRng::seed_from_u64(seed),
    ));
    let session = SessionCoordinator::start_with_rng(store.clone(), StdRng::seed_from_u64(seed))
        .await
        .expect("start");
    (session, store)
}

#[tokio::test]
async fn starts_in_fleet_view_with_seeded_fleet() {
    let (session, _store) = coordinator(1).await;
    assert_eq!(session.view(), SessionView::Fleet);
    assert!(session.focused_device().is_none());
    assert!(!session.fleet().is_empty());
}

#[tokio::test]
async fn focus_and_back_drive_the_view_state_machine() {
    let (mut session, _store) = coordinator(2).await;
    let id = session.fleet()[0].id.clone();

    assert!(session.focus(&id));
    assert_eq!(session.view(), SessionView::Device);
    assert_eq!(session.focused_device_id(), Some(id.as_str()));

    session.clear_focus();
    assert_eq!(session.view(), SessionView::Fleet);
    assert!(session.focused_device_id().is_none());
}

#[tokio::test]
async fn focus_on_unknown_id_is_rejected() {
    let (mut session, _store) = coordinator(3).await;
    assert!(!session.focus("DEV-9999"));
    assert_eq!(session.view(), SessionView::Fleet);
}

#[tokio::test]
async fn tick_refreshes_the_focused_snapshot() {
    let (mut session, _store) = coordinator(4).await;
    let running = session
        .fleet()
        .iter()
        .find(|device| !device.is_offline())
        .expect("running device")
        .id
        .clone();

    session.focus(&running);
    let before = session.focused_device().expect("snapshot").uptime_seconds;
    session.tick();
    let after = session.focused_device().expect("snapshot").uptime_seconds;
    assert!(after > before);
}

#[tokio::test]
async fn clear_all_clears_focus_and_returns_to_fleet_view() {
    let (mut session, _store) = coordinator(5).await;
    let id = session.fleet()[0].id.clone();
    session.focus(&id);

    session.clear_all().await.expect("clear");
    assert_eq!(session.view(), SessionView::Fleet);
    assert!(session.focused_device_id().is_none());
    assert!(session.fleet().is_empty());
}

#[tokio::test]
async fn reset_to_demo_clears_focus() {
    let (mut session, _store) = coordinator(6).await;
    let id = session.fleet()[0].id.clone();
    session.focus(&id);

    let fleet = session.reset_to_demo().await.expect("reset").to_vec();
    assert_eq!(session.view(), SessionView::Fleet);
    assert!(!fleet.is_empty());
}

#[tokio::test]
async fn vanished_focus_id_keeps_the_last_known_snapshot() {
    let (mut session, store) = coordinator(7).await;
    let id = session.fleet()[0].id.clone();
    session.focus(&id);

    // 仓库侧删除焦点设备后刷新工作副本：焦点不自动清除，
    // 详情沿用最后一次已知快照
    store.remove(&id).await.expect("remove");
    session.refresh().await.expect("refresh");

    assert_eq!(session.focused_device_id(), Some(id.as_str()));
    let snapshot = session.focused_device().expect("stale snapshot");
    assert_eq!(snapshot.id, id);
    assert!(session.fleet().iter().all(|device| device.id != id));
}

#[tokio::test]
async fn add_device_replaces_the_working_copy() {
    let (mut session, store) = coordinator(8).await;
    let before = session.fleet().len();

    let mut device = session.fleet()[0].clone();
    device.id = "MANUAL-42".to_string();
    session.add_device(device).await.expect("add");

    assert_eq!(session.fleet().len(), before + 1);
    assert_eq!(session.fleet()[0].id, "MANUAL-42");
    // 仓库与工作副本一致
    assert_eq!(store.load().await.expect("load").len(), before + 1);
}
