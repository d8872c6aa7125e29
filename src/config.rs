use std::{env, path::PathBuf, time::Duration};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_key: Option<SecretString>,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_timeout_secs: u64,
    pub llm_json_mode: bool,
    pub transcript_lang: String,
    pub transcript_timeout_secs: u64,
    pub transcript_path: PathBuf,
    pub max_transcript_chars: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            llm_api_key: env::var("DEEPSEEK_API_KEY")
                .or_else(|_| env::var("OPENAI_API_KEY"))
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            llm_base_url: env::var("LLM_BASE_URL")
                .or_else(|_| env::var("DEEPSEEK_BASE_URL"))
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_model: env::var("MODEL_NAME").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            llm_temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.9),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(20),
            llm_json_mode: env::var("LLM_JSON_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            transcript_lang: env::var("TRANSCRIPT_LANG").unwrap_or_else(|_| "en".to_string()),
            transcript_timeout_secs: env::var("TRANSCRIPT_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(15),
            transcript_path: env::var("TRANSCRIPT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("transcript.json")),
            max_transcript_chars: env::var("MAX_TRANSCRIPT_CHARS")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(48_000),
        }
    }

    /// The LLM credential has no default; callers that need the chat provider must fail early.
    pub fn require_llm_api_key(&self) -> AppResult<SecretString> {
        self.llm_api_key.clone().ok_or_else(|| {
            AppError::ConfigError(
                "set either DEEPSEEK_API_KEY or OPENAI_API_KEY to call the chat provider"
                    .to_string(),
            )
        })
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    pub fn transcript_timeout(&self) -> Duration {
        Duration::from_secs(self.transcript_timeout_secs)
    }

    /// `None` when the budget is disabled (`MAX_TRANSCRIPT_CHARS=0`).
    pub fn transcript_budget(&self) -> Option<usize> {
        (self.max_transcript_chars > 0).then_some(self.max_transcript_chars)
    }

    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            llm_api_key: Some(SecretString::from("test_llm_api_key".to_string())),
            llm_base_url: "http://127.0.0.1:9".to_string(),
            llm_model: "test-model".to_string(),
            llm_temperature: 0.9,
            llm_timeout_secs: 1,
            llm_json_mode: true,
            transcript_lang: "en".to_string(),
            transcript_timeout_secs: 1,
            transcript_path: env::temp_dir().join("hangtube-test-transcript.json"),
            max_transcript_chars: 48_000,
        }
    }
}
