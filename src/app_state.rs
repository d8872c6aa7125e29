use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        providers::{OpenAiChatCompleter, YoutubeTranscriptFetcher},
        QuizPipeline, TranscriptStore,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<QuizPipeline>,
    pub transcript_store: Arc<TranscriptStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let transcripts = Arc::new(YoutubeTranscriptFetcher::from_config(&config)?);
        let chat = Arc::new(OpenAiChatCompleter::from_config(&config)?);
        let pipeline = QuizPipeline::new(transcripts, chat)
            .with_transcript_budget(config.transcript_budget());

        Ok(Self::from_parts(pipeline, config))
    }

    /// Wires a prebuilt pipeline, e.g. one backed by stub providers.
    pub fn from_parts(pipeline: QuizPipeline, config: Config) -> Self {
        let transcript_store = Arc::new(TranscriptStore::new(config.transcript_path.clone()));

        Self {
            pipeline: Arc::new(pipeline),
            transcript_store,
            config: Arc::new(config),
        }
    }
}
