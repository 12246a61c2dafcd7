//! Telemetry 指标快照。
//!
//! - GET /metrics

use api_contract::{ApiResponse, MetricsSnapshotDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nexus_telemetry::metrics;

pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    (
        StatusCode::OK,
        Json(ApiResponse::success(MetricsSnapshotDto {
            ticks_processed: snapshot.ticks_processed,
            devices_advanced: snapshot.devices_advanced,
            devices_added: snapshot.devices_added,
            fleet_resets: snapshot.fleet_resets,
            fleet_clears: snapshot.fleet_clears,
            commands_processed: snapshot.commands_processed,
            command_latency_ms_total: snapshot.command_latency_ms_total,
            command_latency_ms_count: snapshot.command_latency_ms_count,
            diagnostics_requests: snapshot.diagnostics_requests,
            diagnostics_failures: snapshot.diagnostics_failures,
        })),
    )
        .into_response()
}
