//! # Nexus Storage 模块
//!
//! 本模块是机群状态的持久化边界，支持多种存储后端实现。
//!
//! ## 架构设计
//!
//! 该模块采用分层架构，遵循以下原则：
//!
//! 1. **接口抽象层** (`traits.rs`)：快照 blob 后端的异步 Trait 接口
//! 2. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 3. **仓库层** (`fleet.rs`)：机群 CRUD / 重置 / 清空操作
//! 4. **实现层**：
//!    - `in_memory`：内存后端（用于测试和演示）
//!    - `file`：单文件 JSON 后端（生产环境使用）
//!
//! ## 核心特性
//!
//! - **单一 blob**：整个机群序列化为一个 JSON 数组，存放在单一位置
//! - **read-your-writes**：每次变更操作先持久化、后返回完整机群
//! - **冷启动播种**：首次 load 自动播种演示机群并立即持久化
//! - **损坏不掩盖**：blob 解码失败原样上抛，与"尚无数据"严格区分
//! - **可复现**：随机源显式注入，测试可播种固定种子
//!
//! ## 设计约束
//!
//! - 机群的 durable 状态以仓库为唯一权威，调用方在每次变更调用后
//!   必须以返回值替换工作副本
//! - 无模式版本号、无迁移路径：blob 结构变更需手动重置

pub mod error;
pub mod file;
pub mod fleet;
pub mod in_memory;
pub mod traits;

pub use error::*;
pub use file::*;
pub use fleet::*;
pub use in_memory::*;
pub use traits::*;
