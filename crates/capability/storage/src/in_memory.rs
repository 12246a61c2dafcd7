//! 内存存储后端
//!
//! 仅用于测试和演示：快照 blob 保存在进程内的 RwLock 槽位中。

use crate::error::StorageError;
use crate::traits::StateStore;
use std::sync::RwLock;

/// 内存快照后端。
pub struct InMemoryStateStore {
    slot: RwLock<Option<String>>,
}

impl InMemoryStateStore {
    /// 创建空后端（首次 read 返回 None，触发冷启动播种）。
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// 创建预置 payload 的后端（用于测试损坏 blob 等场景）。
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(payload.into())),
        }
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StateStore for InMemoryStateStore {
    async fn read(&self) -> Result<Option<String>, StorageError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| StorageError::new("state lock poisoned"))?;
        Ok(slot.clone())
    }

    async fn write(&self, payload: &str) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| StorageError::new("state lock poisoned"))?;
        *slot = Some(payload.to_string());
        Ok(())
    }
}
