use std::sync::Arc;

use crate::{
    constants::patterns::VIDEO_ID_REGEX,
    errors::{PipelineError, PipelineResult, ProviderError},
    models::domain::{QuizResult, Transcript},
    services::{
        prompt_builder::{self, PromptMode},
        providers::{ChatCompleter, TranscriptFetcher},
        quiz_response_parser,
        transcript_assembler::{assemble, clamp_to_budget, flatten},
    },
};

pub fn validate_video_id(video_id: &str) -> PipelineResult<()> {
    if video_id.trim().is_empty() {
        return Err(PipelineError::input("video_id is required"));
    }
    if !VIDEO_ID_REGEX.is_match(video_id) {
        return Err(PipelineError::input(format!(
            "video_id {:?} is not a valid video id",
            video_id
        )));
    }
    Ok(())
}

/// Fetch, assemble, prompt, complete, parse. Strictly sequential, no retries.
///
/// Every run builds its own transcript and result; the pipeline holds nothing
/// between runs, so one instance can serve concurrent requests.
pub struct QuizPipeline {
    transcripts: Arc<dyn TranscriptFetcher>,
    chat: Arc<dyn ChatCompleter>,
    transcript_budget: Option<usize>,
}

impl QuizPipeline {
    pub fn new(transcripts: Arc<dyn TranscriptFetcher>, chat: Arc<dyn ChatCompleter>) -> Self {
        Self {
            transcripts,
            chat,
            transcript_budget: None,
        }
    }

    /// Caps the transcript text sent to the model, in characters. `Some(0)` means no cap.
    pub fn with_transcript_budget(mut self, max_chars: Option<usize>) -> Self {
        self.transcript_budget = max_chars.filter(|&max_chars| max_chars > 0);
        self
    }

    pub fn model_name(&self) -> String {
        self.chat.model_name()
    }

    pub async fn fetch_transcript(&self, video_id: &str) -> PipelineResult<Transcript> {
        validate_video_id(video_id)?;
        let raw_lines = self.transcripts.fetch_transcript(video_id).await?;
        let transcript = assemble(video_id, raw_lines);
        if flatten(&transcript).trim().is_empty() {
            return Err(ProviderError::new(format!(
                "no captions available for video {}",
                video_id
            ))
            .into());
        }
        Ok(transcript)
    }

    pub async fn run_quiz(&self, video_id: &str) -> PipelineResult<QuizResult> {
        let transcript = self.fetch_transcript(video_id).await?;
        self.run_quiz_from_transcript(&transcript).await
    }

    pub async fn run_quiz_from_transcript(
        &self,
        transcript: &Transcript,
    ) -> PipelineResult<QuizResult> {
        let raw_response = self.complete(transcript, PromptMode::MultipleChoice).await?;
        quiz_response_parser::parse(transcript.video_id(), &raw_response)
    }

    pub async fn generate_free_text_questions(&self, video_id: &str) -> PipelineResult<Vec<String>> {
        let transcript = self.fetch_transcript(video_id).await?;
        self.generate_free_text_questions_from_transcript(&transcript)
            .await
    }

    pub async fn generate_free_text_questions_from_transcript(
        &self,
        transcript: &Transcript,
    ) -> PipelineResult<Vec<String>> {
        let raw_response = self.complete(transcript, PromptMode::FreeText).await?;
        quiz_response_parser::parse_free_text(&raw_response)
    }

    async fn complete(&self, transcript: &Transcript, mode: PromptMode) -> PipelineResult<String> {
        let flattened = flatten(transcript);
        if flattened.trim().is_empty() {
            return Err(PipelineError::input(format!(
                "transcript for {} has no caption text",
                transcript.video_id()
            )));
        }

        let text = match self.transcript_budget {
            Some(max_chars) => clamp_to_budget(&flattened, max_chars),
            None => flattened.as_str(),
        };
        let prompt = prompt_builder::build(text, mode);

        Ok(self.chat.complete_chat(&prompt).await?)
    }
}
