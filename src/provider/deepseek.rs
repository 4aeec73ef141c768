use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Provider;
use crate::errors::EnhanceError;

pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// DeepSeek chat-completions adapter. One request per enhancement; no
/// streaming, no retries beyond what the caller decides.
pub struct DeepSeek {
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl DeepSeek {
    pub fn new(model: String, api_base: String, timeout_secs: u64) -> Self {
        Self { model, api_base, timeout_secs }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<Msg<'a>>,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MsgOut,
}

#[derive(Deserialize)]
struct MsgOut {
    #[serde(default)]
    content: String,
}

/// Upstream error payloads come in two shapes: `{"error": "..."}` and
/// `{"error": {"message": "..."}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ErrorField>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Text(String),
    Object { message: Option<String> },
}

fn upstream_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error: Some(ErrorField::Text(t)) }) => t,
        Ok(ErrorEnvelope { error: Some(ErrorField::Object { message: Some(m) }) }) => m,
        _ => "DeepSeek request failed".to_string(),
    }
}

fn map_transport_error(e: reqwest::Error, timeout_secs: u64) -> EnhanceError {
    if e.is_timeout() {
        EnhanceError::Timeout(timeout_secs)
    } else {
        EnhanceError::TransportFailure(e.to_string())
    }
}

#[async_trait]
impl Provider for DeepSeek {
    async fn send(&self, system_instruction: &str, user_prompt: &str) -> Result<String, EnhanceError> {
        super::check_prompt_len(user_prompt)?;

        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| EnhanceError::MissingCredential(API_KEY_VAR))?;

        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let client = Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| EnhanceError::TransportFailure(e.to_string()))?;

        let body = ChatRequest {
            model: &self.model,
            temperature: 0.4,
            messages: vec![
                Msg { role: "system", content: system_instruction },
                Msg { role: "user", content: user_prompt },
            ],
        };

        let resp = client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.timeout_secs))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| map_transport_error(e, self.timeout_secs))?;

        if !status.is_success() {
            return Err(EnhanceError::UpstreamRejected {
                status: status.as_u16(),
                message: upstream_message(&text),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| EnhanceError::TransportFailure(format!("response parse error: {e}")))?;

        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(EnhanceError::EmptyUpstreamResponse);
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_handles_both_error_shapes() {
        assert_eq!(upstream_message(r#"{"error":"rate limited"}"#), "rate limited");
        assert_eq!(
            upstream_message(r#"{"error":{"message":"bad model"}}"#),
            "bad model"
        );
        assert_eq!(upstream_message("not json"), "DeepSeek request failed");
        assert_eq!(upstream_message("{}"), "DeepSeek request failed");
    }

    #[test]
    fn chat_response_tolerates_missing_choices() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn chat_request_serializes_roles_in_order() {
        let body = ChatRequest {
            model: "deepseek-chat",
            temperature: 0.4,
            messages: vec![
                Msg { role: "system", content: "sys" },
                Msg { role: "user", content: "hi" },
            ],
        };
        let json = serde_json::to_string(&body).unwrap();
        let sys = json.find("\"system\"").unwrap();
        let user = json.find("\"user\"").unwrap();
        assert!(sys < user);
    }
}
