use std::time::Duration;

use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::{
    config::Config,
    constants::prompts::{HTTP_ERROR_HINT, IP_BLOCKING_HINT},
    errors::{AppError, AppResult, ProviderError},
    models::domain::{CaptionSnippet, RawLine},
    services::providers::TranscriptFetcher,
};

/// Fetches captions through YouTube's transcript listing, manual or auto-generated.
pub struct YoutubeTranscriptFetcher {
    api: YouTubeTranscriptApi,
    lang: String,
    timeout: Duration,
}

impl YoutubeTranscriptFetcher {
    pub fn new(lang: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            AppError::ConfigError(format!("failed to build transcript client: {}", e))
        })?;

        Ok(Self {
            api,
            lang: lang.into(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(config.transcript_lang.clone(), config.transcript_timeout())
    }
}

fn snippet_line(text: String, start: f64, duration: f64) -> RawLine {
    RawLine::Snippet(CaptionSnippet {
        start: Some(start),
        duration: Some(duration),
        text: Some(text),
    })
}

// Blocking and rate limiting come from YouTube refusing cloud IPs.
fn provider_error(message: String) -> ProviderError {
    let lowered = message.to_lowercase();
    let error = ProviderError::new(message);

    if lowered.contains("block") || lowered.contains("too many requests") {
        error.with_hint(IP_BLOCKING_HINT)
    } else if lowered.contains("request failed") || lowered.contains("http") {
        error.with_hint(HTTP_ERROR_HINT)
    } else {
        error
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<RawLine>, ProviderError> {
        log::info!("Fetching captions for video {} ({})", video_id, self.lang);

        let languages = [self.lang.as_str()];
        let fetched = tokio::time::timeout(
            self.timeout,
            self.api.fetch_transcript(video_id, &languages, false),
        )
        .await
        .map_err(|_| {
            ProviderError::new(format!(
                "captions request timed out after {}s",
                self.timeout.as_secs()
            ))
            .with_hint(HTTP_ERROR_HINT)
        })?
        .map_err(|e| {
            log::warn!("Captions provider failed for video {}: {}", video_id, e);
            provider_error(format!("could not retrieve captions: {}", e))
        })?;

        log::info!(
            "Fetched {} caption lines for video {} ({}, auto-generated: {})",
            fetched.snippets.len(),
            video_id,
            fetched.language_code,
            fetched.is_generated
        );

        Ok(fetched
            .snippets
            .into_iter()
            .map(|snippet| snippet_line(snippet.text, snippet.start, snippet.duration))
            .collect())
    }
}
