//! 诊断接口 Trait 定义。

use crate::error::DiagnosticsError;
use domain::AvDevice;
use async_trait::async_trait;

/// 生成式 AI 诊断协作方的能力接口。
///
/// 单一操作：以设备快照与可选用户问题换取一段非结构化分析文本。
/// 通过注入实现，核心测试无需发起真实网络调用。
#[async_trait]
pub trait DiagnosticService: Send + Sync {
    async fn diagnose(
        &self,
        device: &AvDevice,
        question: Option<&str>,
    ) -> Result<String, DiagnosticsError>;
}

/// 未配置凭证时的占位实现：每次调用都报缺失凭证。
pub struct NoopDiagnostics;

#[async_trait]
impl DiagnosticService for NoopDiagnostics {
    async fn diagnose(
        &self,
        _device: &AvDevice,
        _question: Option<&str>,
    ) -> Result<String, DiagnosticsError> {
        Err(DiagnosticsError::MissingCredential)
    }
}
