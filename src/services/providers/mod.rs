pub mod openai_chat;
pub mod youtube_transcript;

use async_trait::async_trait;

use crate::{
    errors::ProviderError,
    models::domain::RawLine,
    services::prompt_builder::ChatPrompt,
};

pub use openai_chat::OpenAiChatCompleter;
pub use youtube_transcript::YoutubeTranscriptFetcher;

/// Captions source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<RawLine>, ProviderError>;
}

/// Single chat endpoint; returns the full (non-streamed) message content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete_chat(&self, prompt: &ChatPrompt) -> Result<String, ProviderError>;

    fn model_name(&self) -> String;
}
