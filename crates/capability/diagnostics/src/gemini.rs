//! Gemini 诊断客户端
//!
//! 调用 Google Generative Language API 的 generateContent 端点。
//! 协作方返回的是非结构化文本：这里只取第一候选的拼接文本，
//! 不对内容结构做任何假设。

use crate::error::DiagnosticsError;
use crate::prompt::build_prompt;
use crate::traits::DiagnosticService;
use domain::AvDevice;
use serde::Deserialize;
use tracing::warn;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// 模型产出为空时的回退文案。
const EMPTY_RESPONSE_NOTICE: &str = "Analysis complete, but no text returned.";

/// Gemini 诊断客户端。
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait::async_trait]
impl DiagnosticService for GeminiClient {
    async fn diagnose(
        &self,
        device: &AvDevice,
        question: Option<&str>,
    ) -> Result<String, DiagnosticsError> {
        let prompt = build_prompt(device, question);
        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| DiagnosticsError::ServiceUnavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(target: "nexus.diagnostics", %status, "generate_content_failed");
            return Err(DiagnosticsError::ServiceUnavailable(format!(
                "upstream status {status}"
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| DiagnosticsError::ServiceUnavailable(err.to_string()))?;

        let text = payload.first_text();
        if text.is_empty() {
            return Ok(EMPTY_RESPONSE_NOTICE.to_string());
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn first_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
