//! Chat-completion backend that does the actual writing.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    error::{Result, ScriptError},
    prompt::Prompt,
    provider::ProviderConfig,
};

/// Sampling settings for one call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationParams {
    pub const SCRIPT: GenerationParams = GenerationParams {
        max_tokens: 400,
        temperature: 0.7,
    };

    pub const TRANSCREATION: GenerationParams = GenerationParams {
        max_tokens: 500,
        temperature: 0.8,
    };
}

/// Something that turns a prompt into text. One call, no retries.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, prompt: &Prompt, params: GenerationParams) -> Result<String>;
}

/// OpenAI-compatible chat completions over HTTP
pub struct ChatCompletionsClient {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl ChatCompletionsClient {
    pub fn new(config: &ProviderConfig, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.to_string(),
            model: config.model.to_string(),
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &Prompt, params: GenerationParams) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": &prompt.system,
                },
                {
                    "role": "user",
                    "content": &prompt.user,
                },
            ],
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        })
    }
}

#[async_trait]
impl GenerationClient for ChatCompletionsClient {
    async fn generate(&self, prompt: &Prompt, params: GenerationParams) -> Result<String> {
        info!(
            model = %self.model,
            max_tokens = params.max_tokens,
            system_len = prompt.system.len(),
            user_len = prompt.user.len(),
            "requesting completion"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&self.request_body(prompt, params))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_failure(status.as_u16(), response.text().await));
        }

        let response = response.json::<serde_json::Value>().await?;
        let content = extract_content(&response)?;
        debug!(len = content.len(), "completion received");
        Ok(content)
    }
}

/// Non-2xx reply. The body is best effort, a failed read is reported in its place.
fn status_failure(status: u16, body: std::result::Result<String, impl std::fmt::Display>) -> ScriptError {
    let reason = match body {
        Ok(body) => format!("server returned {}: {}", status, body),
        Err(e) => format!("server returned {} (body unreadable: {})", status, e),
    };
    ScriptError::GenerationFailed { reason }
}

/// Pull `choices[0].message.content` out of a chat completion response
fn extract_content(response: &serde_json::Value) -> Result<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.trim().to_string())
        .ok_or_else(|| ScriptError::GenerationFailed {
            reason: format!("Invalid API response: {:?}", response),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::OPENAI;

    #[test]
    fn request_body_shape() {
        let client = ChatCompletionsClient::new(&OPENAI, "sk-test".into());
        let prompt = Prompt {
            system: "sys".into(),
            user: "usr".into(),
        };
        let body = client.request_body(&prompt, GenerationParams::SCRIPT);

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "usr");
        assert_eq!(body["max_tokens"], 400);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn extracts_and_trims_content() {
        let response = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "\n**HOOK:** hi\n"}}]
        });
        assert_eq!(extract_content(&response).unwrap(), "**HOOK:** hi");
    }

    #[test]
    fn error_status_keeps_body_or_read_error() {
        let err = status_failure(429, Ok::<_, String>("rate limited".into()));
        assert!(matches!(err, ScriptError::GenerationFailed { ref reason } if reason == "server returned 429: rate limited"));

        let err = status_failure(502, Err::<String, _>("connection reset"));
        assert!(matches!(
            err,
            ScriptError::GenerationFailed { ref reason }
                if reason == "server returned 502 (body unreadable: connection reset)"
        ));
    }

    #[test]
    fn malformed_response_is_generation_failure() {
        let response = serde_json::json!({"error": {"message": "quota exceeded"}});
        let err = extract_content(&response).unwrap_err();
        assert!(matches!(err, ScriptError::GenerationFailed { ref reason } if reason.contains("quota exceeded")));
    }
}
