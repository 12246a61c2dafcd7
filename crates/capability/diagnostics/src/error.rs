//! 诊断能力错误类型。

/// 诊断协作方调用错误。
///
/// 协作方可能失败、可能缓慢、返回非结构化文本；调用方负责把
/// 错误本地恢复为面向用户的占位消息，绝不让会话崩溃。
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError {
    /// 未配置 API 凭证。
    #[error("api key is not configured")]
    MissingCredential,
    /// 网络或服务端错误。
    #[error("diagnostic service unavailable: {0}")]
    ServiceUnavailable(String),
}
