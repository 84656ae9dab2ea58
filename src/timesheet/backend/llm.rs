//! OpenAI-compatible chat completion backend.
//!
//! Sends the style prompt as the system message and the raw notes as the user
//! message, then returns the first choice's content. Every failure mode
//! (missing API key, transport error, non-2xx status, malformed or empty
//! reply) is reported as [`TimesheetError::Llm`].

use super::RewriteBackend;
use crate::config::LlmConfig;
use crate::error::{Result, TimesheetError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub struct LlmBackend {
    client: Client,
    config: LlmConfig,
    api_key: String,
}

impl LlmBackend {
    /// Builds a backend reading the API key from `config.api_key_env`.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TimesheetError::Llm(format!(
                    "missing credentials: {} is not set",
                    config.api_key_env
                ))
            })?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: &LlmConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TimesheetError::Llm(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key: api_key.into(),
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

impl RewriteBackend for LlmBackend {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn rewrite(&self, raw: &str, style: &str) -> Result<String> {
        let request = build_request(&self.config.model, raw, style);
        let url = self.completions_url();
        tracing::debug!(%url, model = %self.config.model, "sending rewrite request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| TimesheetError::Llm(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| TimesheetError::Llm(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            let snippet: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(TimesheetError::Llm(format!(
                "server error: HTTP {} - {}",
                status.as_u16(),
                snippet
            )));
        }

        parse_reply(&body)
    }
}

pub fn build_request(model: &str, raw: &str, style: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: style.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: raw.to_string(),
            },
        ],
        temperature: 0.2,
        stream: false,
    }
}

/// Extracts the first choice's content from a chat completion body.
pub fn parse_reply(body: &str) -> Result<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TimesheetError::Llm(format!("malformed response: {}", e)))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .unwrap_or_default();

    if content.is_empty() {
        return Err(TimesheetError::Llm("empty response".to_string()));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::rewrite_text;
    use crate::commands::rewrite::{run_with, RewriteOptions};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(endpoint: &str) -> LlmConfig {
        LlmConfig {
            enabled: true,
            endpoint: endpoint.to_string(),
            timeout_secs: 2,
            ..LlmConfig::default()
        }
    }

    #[test]
    fn request_carries_style_then_notes() {
        let req = build_request("m", "fixed printer", "be brief");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "be brief");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "fixed printer");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn parses_first_choice() {
        let body = r#"{"id":"x","choices":[
            {"index":0,"message":{"role":"assistant","content":"  Fixed it. – TCG\n"}},
            {"index":1,"message":{"role":"assistant","content":"other"}}
        ]}"#;
        assert_eq!(parse_reply(body).unwrap(), "Fixed it. – TCG");
    }

    #[test]
    fn empty_or_missing_content_is_an_error() {
        assert!(parse_reply(r#"{"choices":[]}"#).is_err());
        assert!(parse_reply(r#"{"choices":[{"message":{"role":"assistant","content":"  "}}]}"#)
            .is_err());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = parse_reply("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, TimesheetError::Llm(msg) if msg.starts_with("malformed")));
    }

    #[test]
    fn missing_key_is_reported_before_any_request() {
        let mut cfg = config("http://127.0.0.1:9");
        cfg.api_key_env = "TIMESHEET_TEST_KEY_THAT_IS_NEVER_SET".to_string();
        let err = LlmBackend::from_config(&cfg).err().unwrap();
        assert!(err.to_string().contains("TIMESHEET_TEST_KEY_THAT_IS_NEVER_SET"));
    }

    const NOTES: &str = "- printer jammed, toner everywhere - TCG\n- weekly sync\n";

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap()
    }

    fn completion(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
    }

    #[test]
    fn posts_chat_completion_with_bearer_token() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/v1/chat/completions"))
                .and(header("authorization", "Bearer sk-test"))
                .and(body_partial_json(serde_json::json!({
                    "model": "gpt-4o-mini",
                    "stream": false,
                    "messages": [
                        {"role": "system", "content": "be formal"},
                        {"role": "user", "content": NOTES}
                    ]
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(completion(
                    "Addressed a printer fault. – TCG\n\nAttended the weekly sync.\n",
                )))
                .expect(1)
                .mount(&server),
        );

        let backend =
            LlmBackend::with_api_key(&config(&format!("{}/v1", server.uri())), "sk-test").unwrap();
        let options = RewriteOptions {
            default_client: Some("NR".to_string()),
            style: "be formal".to_string(),
        };
        let result = run_with(Some(&backend), NOTES, &options).unwrap();

        assert!(!result.has_warnings());
        assert_eq!(
            result.output.as_deref(),
            Some("Addressed a printer fault. – TCG\nAttended the weekly sync. – NR\n")
        );
        assert_eq!(result.messages[0].content, "Rewritten by gpt-4o-mini.");
    }

    #[test]
    fn server_error_maps_status_and_falls_back() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/chat/completions"))
                .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
                .expect(2)
                .mount(&server),
        );

        let backend = LlmBackend::with_api_key(&config(&server.uri()), "sk-test").unwrap();
        let err = backend.rewrite(NOTES, "style").unwrap_err();
        assert_eq!(
            err.to_string(),
            "LLM error: server error: HTTP 500 - upstream exploded"
        );

        let options = RewriteOptions {
            default_client: None,
            style: "style".to_string(),
        };
        let result = run_with(Some(&backend), NOTES, &options).unwrap();
        assert!(result.has_warnings());
        assert!(result.messages[0].content.contains("HTTP 500"));
        assert_eq!(result.output, Some(rewrite_text(NOTES)));
    }

    #[test]
    fn unreachable_endpoint_is_an_error() {
        let backend = LlmBackend::with_api_key(&config("http://127.0.0.1:9/"), "k").unwrap();
        assert_eq!(backend.completions_url(), "http://127.0.0.1:9/chat/completions");
        assert!(backend.rewrite("fixed printer", "style").is_err());
    }
}
