use nexus_config::AppConfig;

#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("NEXUS_HTTP_ADDR", "127.0.0.1:8081");
        std::env::set_var("NEXUS_POLL_INTERVAL_SECONDS", "10");
        std::env::set_var("NEXUS_SIMULATION_SEED", "42");
        std::env::set_var("NEXUS_TERMINAL_LATENCY_BASE_MS", "0");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert_eq!(config.poll_interval_seconds, 10);
    assert_eq!(config.simulation_seed, Some(42));
    assert_eq!(config.terminal_latency_base_ms, 0);
    // 未设置的键落到默认值
    assert_eq!(config.gemini_model, "gemini-2.5-flash-latest");
}
