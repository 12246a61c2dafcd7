//! 机群仓库
//!
//! 持久化边界的唯一权威：所有变更操作先落盘、后返回完整机群
//! （绝不返回增量），保证调用方拿到的内存表示与持久化表示一致
//! （read-your-writes）。
//!
//! 冷启动路径：load 发现无历史 blob 时播种演示机群并立即持久化；
//! blob 存在但解码失败视为损坏，错误原样上抛，不回退默认值。

use crate::error::StorageError;
use crate::traits::StateStore;
use domain::AvDevice;
use nexus_generator::{demo_fleet, snmp_baseline};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, MutexGuard};
use time::OffsetDateTime;

/// 机群仓库。
///
/// 随机源在构造时注入：生产环境取系统熵，测试环境播种固定种子
/// 以复现播种结果。
pub struct FleetRepository {
    state: Arc<dyn StateStore>,
    rng: Mutex<StdRng>,
}

impl FleetRepository {
    /// 以系统熵随机源创建仓库。
    pub fn new(state: Arc<dyn StateStore>) -> Self {
        Self::with_rng(state, StdRng::from_os_rng())
    }

    /// 以显式随机源创建仓库。
    pub fn with_rng(state: Arc<dyn StateStore>, rng: StdRng) -> Self {
        Self {
            state,
            rng: Mutex::new(rng),
        }
    }

    /// 读取机群。
    ///
    /// 无持久化状态时走冷启动：播种演示机群（含生成器的 SNMP
    /// 基线）并立即持久化后返回。
    pub async fn load(&self) -> Result<Vec<AvDevice>, StorageError> {
        match self.state.read().await? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => self.seed_demo().await,
        }
    }

    /// 头插一台完整设备并持久化。
    ///
    /// 入库前补齐生成器的 SNMP 基线。
    pub async fn add(&self, device: AvDevice) -> Result<Vec<AvDevice>, StorageError> {
        let mut fleet = self.load().await?;
        let device = {
            let mut rng = self.lock_rng()?;
            let mut device = device;
            let rows = snmp_baseline(&device, &mut *rng);
            device.snmp_data = rows;
            device
        };
        fleet.insert(0, device);
        self.persist(&fleet).await?;
        Ok(fleet)
    }

    /// 替换 id 匹配的设备并持久化；id 不存在时静默无操作。
    pub async fn update(&self, device: AvDevice) -> Result<Vec<AvDevice>, StorageError> {
        let mut fleet = self.load().await?;
        if let Some(slot) = fleet.iter_mut().find(|entry| entry.id == device.id) {
            *slot = device;
        }
        self.persist(&fleet).await?;
        Ok(fleet)
    }

    /// 删除 id 匹配的设备并持久化；id 不存在时无操作。
    pub async fn remove(&self, device_id: &str) -> Result<Vec<AvDevice>, StorageError> {
        let mut fleet = self.load().await?;
        fleet.retain(|entry| entry.id != device_id);
        self.persist(&fleet).await?;
        Ok(fleet)
    }

    /// 丢弃持久化状态，按冷启动路径重新播种。
    pub async fn reset_to_demo(&self) -> Result<Vec<AvDevice>, StorageError> {
        self.seed_demo().await
    }

    /// 持久化并返回空机群。
    pub async fn clear_all(&self) -> Result<Vec<AvDevice>, StorageError> {
        let fleet = Vec::new();
        self.persist(&fleet).await?;
        Ok(fleet)
    }

    async fn seed_demo(&self) -> Result<Vec<AvDevice>, StorageError> {
        let fleet = {
            let mut rng = self.lock_rng()?;
            let now = OffsetDateTime::now_utc();
            let mut fleet = demo_fleet(now, &mut *rng);
            for device in &mut fleet {
                let rows = snmp_baseline(device, &mut *rng);
                device.snmp_data = rows;
            }
            fleet
        };
        self.persist(&fleet).await?;
        Ok(fleet)
    }

    async fn persist(&self, fleet: &[AvDevice]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(fleet)?;
        self.state.write(&payload).await
    }

    fn lock_rng(&self) -> Result<MutexGuard<'_, StdRng>, StorageError> {
        self.rng
            .lock()
            .map_err(|_| StorageError::new("rng lock poisoned"))
    }
}
