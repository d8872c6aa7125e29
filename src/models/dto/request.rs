use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::patterns::VIDEO_ID_REGEX,
    errors::{AppError, AppResult},
    models::domain::{Transcript, TranscriptDocument},
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FetchTranscriptRequest {
    #[validate(regex(path = *VIDEO_ID_REGEX, message = "video_id must be a valid video id"))]
    pub video_id: String,

    #[validate(length(min = 1, max = 255))]
    pub outfile: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    #[validate(regex(path = *VIDEO_ID_REGEX, message = "video_id must be a valid video id"))]
    pub video_id: String,
}

/// Either a video to fetch or a transcript the caller already holds.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(regex(path = *VIDEO_ID_REGEX, message = "video_id must be a valid video id"))]
    pub video_id: Option<String>,

    pub transcript: Option<TranscriptDocument>,
}

pub enum QuizSource {
    VideoId(String),
    Transcript(Transcript),
}

impl GenerateQuizRequest {
    pub fn into_source(self) -> AppResult<QuizSource> {
        self.validate()?;

        match (self.video_id, self.transcript) {
            (_, Some(document)) => Ok(QuizSource::Transcript(document.into_transcript()?)),
            (Some(video_id), None) => Ok(QuizSource::VideoId(video_id)),
            (None, None) => Err(AppError::ValidationError(
                "provide either video_id or transcript".to_string(),
            )),
        }
    }
}
