//! 存储接口 Trait 定义
//!
//! 机群快照以单个序列化 blob 的形式持久化在单一位置下。
//! `StateStore` 是注入给仓库的后端接口：
//! - read：读取 blob；尚无持久化状态时返回 None（冷启动）
//! - write：整体覆盖写入 blob
//!
//! 设计原则：
//! - 损坏与"尚无数据"是两种不同结果：后者返回 Ok(None)，
//!   前者由解码环节报 StorageError
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use async_trait::async_trait;

/// 机群快照 blob 的存储后端接口。
#[async_trait]
pub trait StateStore: Send + Sync {
    /// 读取持久化的快照 blob；无历史状态时返回 None。
    async fn read(&self) -> Result<Option<String>, StorageError>;

    /// 覆盖写入快照 blob。
    async fn write(&self, payload: &str) -> Result<(), StorageError>;
}
