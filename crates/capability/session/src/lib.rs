//! 会话协调能力
//!
//! 持有当前会话的机群工作副本与焦点状态机，驱动轮询节奏：
//! - 每个 tick 用步进器推进整个机群，并按 id 在新快照中重解析焦点
//! - 变更意图（新增/重置/清空）直达仓库，以返回的机群整体替换工作副本
//! - 重置与清空无条件清除焦点
//!
//! 焦点状态机只有一个变量 `focused_device_id`：
//! - 无焦点 → 机群视图（列表/仪表盘/拓扑）
//! - 有焦点 → 设备视图（详情）
//!
//! 焦点 id 在新快照中消失时不自动清除焦点，详情沿用最后一次
//! 已知快照。这是有意保留的设计取舍，由测试固定其行为。

use domain::AvDevice;
use nexus_simulation::advance;
use nexus_storage::{FleetRepository, StorageError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::info;

/// 会话视图（由焦点状态推导）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView {
    Fleet,
    Device,
}

/// 会话协调错误。
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// 会话协调器。
///
/// 单逻辑线程模型：tick 与用户动作由宿主事件循环按到达顺序
/// 串行执行，协调器内部不做并发防护。
pub struct SessionCoordinator {
    store: Arc<FleetRepository>,
    fleet: Vec<AvDevice>,
    focused_device_id: Option<String>,
    focused_snapshot: Option<AvDevice>,
    rng: StdRng,
}

impl SessionCoordinator {
    /// 从仓库加载机群并以系统熵随机源启动会话。
    pub async fn start(store: Arc<FleetRepository>) -> Result<Self, SessionError> {
        Self::start_with_rng(store, StdRng::from_os_rng()).await
    }

    /// 从仓库加载机群并以显式随机源启动会话（可复现仿真）。
    pub async fn start_with_rng(
        store: Arc<FleetRepository>,
        rng: StdRng,
    ) -> Result<Self, SessionError> {
        let fleet = store.load().await?;
        info!(target: "nexus.session", fleet_size = fleet.len(), "session_started");
        Ok(Self {
            store,
            fleet,
            focused_device_id: None,
            focused_snapshot: None,
            rng,
        })
    }

    /// 当前机群工作副本。
    pub fn fleet(&self) -> &[AvDevice] {
        &self.fleet
    }

    /// 当前视图。
    pub fn view(&self) -> SessionView {
        if self.focused_device_id.is_some() {
            SessionView::Device
        } else {
            SessionView::Fleet
        }
    }

    /// 当前焦点设备 id。
    pub fn focused_device_id(&self) -> Option<&str> {
        self.focused_device_id.as_deref()
    }

    /// 焦点设备的最近一次已知快照。
    pub fn focused_device(&self) -> Option<&AvDevice> {
        self.focused_snapshot.as_ref()
    }

    /// 选中设备进入设备视图；id 不在工作副本中时不改变状态。
    pub fn focus(&mut self, device_id: &str) -> bool {
        match self.fleet.iter().find(|device| device.id == device_id) {
            Some(device) => {
                self.focused_snapshot = Some(device.clone());
                self.focused_device_id = Some(device_id.to_string());
                true
            }
            None => false,
        }
    }

    /// 返回机群视图并清除焦点。
    pub fn clear_focus(&mut self) {
        self.focused_device_id = None;
        self.focused_snapshot = None;
    }

    /// 推进一个仿真 tick 并重解析焦点。
    pub fn tick(&mut self) {
        self.fleet = advance(&self.fleet, &mut self.rng);
        self.resolve_focus();
    }

    /// 从仓库重新加载机群，整体替换工作副本。
    pub async fn refresh(&mut self) -> Result<&[AvDevice], SessionError> {
        self.fleet = self.store.load().await?;
        self.resolve_focus();
        Ok(&self.fleet)
    }

    /// 新增设备：直达仓库，返回机群替换工作副本（焦点不变）。
    pub async fn add_device(&mut self, device: AvDevice) -> Result<&[AvDevice], SessionError> {
        self.fleet = self.store.add(device).await?;
        self.resolve_focus();
        Ok(&self.fleet)
    }

    /// 重置为演示机群，并无条件清除焦点。
    pub async fn reset_to_demo(&mut self) -> Result<&[AvDevice], SessionError> {
        self.fleet = self.store.reset_to_demo().await?;
        self.clear_focus();
        Ok(&self.fleet)
    }

    /// 清空机群，并无条件清除焦点。
    pub async fn clear_all(&mut self) -> Result<&[AvDevice], SessionError> {
        self.fleet = self.store.clear_all().await?;
        self.clear_focus();
        Ok(&self.fleet)
    }

    /// 按 id 在当前工作副本中重解析焦点快照。
    ///
    /// id 已消失时保留上一次快照（详情视图显示陈旧数据）。
    fn resolve_focus(&mut self) {
        if let Some(id) = &self.focused_device_id {
            if let Some(device) = self.fleet.iter().find(|device| &device.id == id) {
                self.focused_snapshot = Some(device.clone());
            }
        }
    }
}
