//! 文件存储后端
//!
//! 生产环境使用：快照 blob 保存为磁盘上的单个 JSON 文件。
//! 没有模式版本号与迁移路径，blob 结构变更需要手动重置。

use crate::error::StorageError;
use crate::traits::StateStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 文件快照后端。
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl StateStore for FileStateStore {
    /// 文件不存在视为冷启动；其余 I/O 错误原样上抛。
    async fn read(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}
