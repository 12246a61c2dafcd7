//! 会话焦点 handlers
//!
//! - GET /session - 当前会话状态
//! - POST /session/focus/{id} - 选中设备进入设备视图
//! - POST /session/back - 返回机群视图

use crate::AppState;
use crate::handlers::devices::DevicePath;
use crate::utils::response::not_found_error;
use api_contract::{ApiResponse, SessionStateDto};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nexus_session::{SessionCoordinator, SessionView};

fn session_state_dto(session: &SessionCoordinator) -> SessionStateDto {
    SessionStateDto {
        view: match session.view() {
            SessionView::Fleet => "fleet".to_string(),
            SessionView::Device => "device".to_string(),
        },
        focused_device_id: session.focused_device_id().map(str::to_string),
        fleet_size: session.fleet().len(),
    }
}

/// 当前会话状态
pub async fn get_session(State(state): State<AppState>) -> Response {
    let session = state.session.lock().await;
    (
        StatusCode::OK,
        Json(ApiResponse::success(session_state_dto(&session))),
    )
        .into_response()
}

/// 选中设备进入设备视图
pub async fn focus_device(
    State(state): State<AppState>,
    Path(path): Path<DevicePath>,
) -> Response {
    let mut session = state.session.lock().await;
    if !session.focus(&path.device_id) {
        return not_found_error();
    }
    (
        StatusCode::OK,
        Json(ApiResponse::success(session_state_dto(&session))),
    )
        .into_response()
}

/// 返回机群视图（清除焦点）
pub async fn back_to_fleet(State(state): State<AppState>) -> Response {
    let mut session = state.session.lock().await;
    session.clear_focus();
    (
        StatusCode::OK,
        Json(ApiResponse::success(session_state_dto(&session))),
    )
        .into_response()
}
