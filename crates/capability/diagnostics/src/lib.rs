//! 诊断能力
//!
//! 生成式 AI 文本诊断的请求/响应边界：
//! - 出站：嵌入设备身份、遥测、近期日志与可选用户问题的结构化提示词
//! - 入站：单段非结构化文本，或显式的失败错误
//!
//! 协作方被视为不可靠：可能失败、可能缓慢、内容不可解析。
//! 失败由调用方恢复为占位消息，不会中断会话。

pub mod error;
pub mod gemini;
pub mod prompt;
pub mod traits;

pub use error::*;
pub use gemini::*;
pub use prompt::*;
pub use traits::*;
