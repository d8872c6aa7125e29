use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::Config,
    constants::prompts::RATE_LIMIT_HINT,
    errors::{AppResult, ProviderError},
    services::{
        prompt_builder::{ChatPrompt, PromptMode},
        providers::ChatCompleter,
    },
};

const FREE_TEXT_MAX_TOKENS: u32 = 500;
const MULTIPLE_CHOICE_MAX_TOKENS: u32 = 1000;

/// Chat completions against any OpenAI-compatible endpoint (OpenAI, DeepSeek).
pub struct OpenAiChatCompleter {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    json_mode: bool,
    timeout: Duration,
}

impl OpenAiChatCompleter {
    pub fn new(
        api_key: &SecretString,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(base_url.into());

        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: 0.9,
            json_mode: false,
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let api_key = config.require_llm_api_key()?;

        Ok(Self::new(&api_key, config.llm_base_url.clone(), config.llm_model.clone())
            .with_temperature(config.llm_temperature)
            .with_json_mode(config.llm_json_mode)
            .with_timeout(config.llm_timeout()))
    }

    fn request_body(&self, prompt: &ChatPrompt) -> Value {
        let max_tokens = match prompt.mode {
            PromptMode::FreeText => FREE_TEXT_MAX_TOKENS,
            PromptMode::MultipleChoice => MULTIPLE_CHOICE_MAX_TOKENS,
        };

        let mut body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system_message },
                { "role": "user", "content": prompt.user_message }
            ],
            "temperature": self.temperature,
            "max_tokens": max_tokens,
            "stream": false
        });

        if self.json_mode && prompt.mode == PromptMode::MultipleChoice {
            body["response_format"] = json!({ "type": "json_object" });
        }

        body
    }
}

fn provider_error(message: String) -> ProviderError {
    let lowered = message.to_lowercase();
    let error = ProviderError::new(message);
    if lowered.contains("rate limit") || lowered.contains("429") {
        error.with_hint(RATE_LIMIT_HINT)
    } else {
        error
    }
}

#[async_trait]
impl ChatCompleter for OpenAiChatCompleter {
    async fn complete_chat(&self, prompt: &ChatPrompt) -> Result<String, ProviderError> {
        log::info!(
            "Requesting {:?} completion from model {}",
            prompt.mode,
            self.model
        );

        let chat = self.client.chat();
        let request = chat.create_byot(self.request_body(prompt));
        let response: Value = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| {
                ProviderError::new(format!(
                    "chat completion timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| provider_error(format!("chat completion failed: {}", e)))?;

        let content = response
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ProviderError::new("malformed transport response: no message content")
            })?;

        log::debug!("Received {} bytes of completion text", content.len());
        Ok(content.trim().to_string())
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt_builder::build;

    fn completer(json_mode: bool) -> OpenAiChatCompleter {
        OpenAiChatCompleter::new(
            &SecretString::from("test-key".to_string()),
            "http://127.0.0.1:9",
            "deepseek-chat",
        )
        .with_json_mode(json_mode)
    }

    #[test]
    fn request_body_carries_both_messages() {
        let prompt = build("hello world", PromptMode::FreeText);
        let body = completer(true).request_body(&prompt);

        assert_eq!(body["model"], json!("deepseek-chat"));
        assert_eq!(body["messages"][0]["role"], json!("system"));
        assert_eq!(body["messages"][1]["content"], json!(prompt.user_message));
        assert_eq!(body["max_tokens"], json!(FREE_TEXT_MAX_TOKENS));
        assert_eq!(body["stream"], json!(false));
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn json_mode_only_applies_to_multiple_choice() {
        let prompt = build("hello world", PromptMode::MultipleChoice);

        let body = completer(true).request_body(&prompt);
        assert_eq!(body["response_format"]["type"], json!("json_object"));
        assert_eq!(body["max_tokens"], json!(MULTIPLE_CHOICE_MAX_TOKENS));

        let body = completer(false).request_body(&prompt);
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn rate_limit_failures_carry_a_hint() {
        let err = provider_error("chat completion failed: Rate limit reached".to_string());
        assert_eq!(err.hint, Some(RATE_LIMIT_HINT));

        let err = provider_error("chat completion failed: invalid api key".to_string());
        assert_eq!(err.hint, None);
    }

    #[test]
    fn from_config_requires_a_key() {
        let config = Config {
            llm_api_key: None,
            ..Config::test_config()
        };

        assert!(OpenAiChatCompleter::from_config(&config).is_err());
        assert!(OpenAiChatCompleter::from_config(&Config::test_config()).is_ok());
    }

    #[test]
    fn model_name_is_reported() {
        assert_eq!(completer(false).model_name(), "deepseek-chat");
    }
}
