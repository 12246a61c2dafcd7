//! NEXUS AV 控制台 API 服务器
//!
//! 装配顺序：
//! 1. 加载配置与日志
//! 2. 组建存储后端 → 机群仓库 → 会话协调器
//! 3. 启动后台仿真轮询任务（固定周期推进机群）
//! 4. 暴露 HTTP API（/api 前缀与裸路径两套路由）
//!
//! 并发模型：会话协调器放在一把 tokio Mutex 之后，轮询 tick 与
//! 用户动作按到达顺序串行执行，不存在交错的中间状态。

mod handlers;
mod routes;
mod utils;

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
};
use nexus_config::AppConfig;
use nexus_diagnostics::{DiagnosticService, GeminiClient, NoopDiagnostics};
use nexus_session::SessionCoordinator;
use nexus_storage::{FileStateStore, FleetRepository, StateStore};
use nexus_telemetry::{init_tracing, new_request_ids, record_tick};
use nexus_terminal::{Interpreter, TerminalConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{Instrument, info};

/// 应用共享状态。
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SessionCoordinator>>,
    pub interpreter: Arc<Interpreter>,
    pub diagnostics: Arc<dyn DiagnosticService>,
    /// 终端延迟抖动随机源。
    pub command_rng: Arc<Mutex<StdRng>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 单文件 JSON 快照后端
    let state_store: Arc<dyn StateStore> = Arc::new(FileStateStore::new(&config.data_path));
    // 机群仓库：可选的显式种子用于复现仿真
    let repository = Arc::new(match config.simulation_seed {
        Some(seed) => FleetRepository::with_rng(state_store, StdRng::seed_from_u64(seed)),
        None => FleetRepository::new(state_store),
    });

    // 会话协调器：启动即加载机群（冷启动时播种演示数据）
    let session = match config.simulation_seed {
        Some(seed) => {
            SessionCoordinator::start_with_rng(repository.clone(), StdRng::seed_from_u64(seed))
                .await?
        }
        None => SessionCoordinator::start(repository.clone()).await?,
    };
    let session = Arc::new(Mutex::new(session));

    let interpreter = Arc::new(Interpreter::new(TerminalConfig {
        latency_base_ms: config.terminal_latency_base_ms,
        latency_jitter_ms: config.terminal_latency_jitter_ms,
    }));
    let diagnostics: Arc<dyn DiagnosticService> = match &config.gemini_api_key {
        Some(key) => Arc::new(GeminiClient::new(key.clone(), config.gemini_model.clone())),
        None => Arc::new(NoopDiagnostics),
    };

    let state = AppState {
        session: session.clone(),
        interpreter,
        diagnostics,
        command_rng: Arc::new(Mutex::new(StdRng::from_os_rng())),
    };

    // 后台仿真轮询：每个周期推进一次整个机群
    let poll_interval = Duration::from_secs(config.poll_interval_seconds.max(1));
    tokio::spawn(run_simulation_loop(session, poll_interval));

    // /api 前缀与裸路径两套路由
    let app = axum::Router::new()
        .nest("/api", routes::create_api_router())
        .merge(routes::create_api_router())
        .with_state(state)
        // 注入 request_id/trace_id
        .layer(middleware::from_fn(request_context));

    info!(target: "nexus.api", addr = %config.http_addr, "listening");
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// 仿真轮询任务：按固定周期对会话执行 tick。
async fn run_simulation_loop(session: Arc<Mutex<SessionCoordinator>>, period: Duration) {
    let mut interval = tokio::time::interval(period);
    // 首次立即完成的 tick 跳过，避免启动即双重推进
    interval.tick().await;
    loop {
        interval.tick().await;
        let mut session = session.lock().await;
        session.tick();
        let advanced = session
            .fleet()
            .iter()
            .filter(|device| !device.is_offline())
            .count() as u64;
        record_tick(advanced);
    }
}

async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    // 生成 request_id 与 trace_id，并注入请求扩展与日志
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());

    let span = tracing::info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}
