use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::QuizResult;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeTextQuestionsResponse {
    pub video_id: String,
    pub questions: Vec<String>,
    pub count: usize,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl FreeTextQuestionsResponse {
    pub fn new(video_id: impl Into<String>, questions: Vec<String>, model: String) -> Self {
        Self {
            video_id: video_id.into(),
            count: questions.len(),
            questions,
            model,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    #[serde(flatten)]
    pub quiz: QuizResult,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl QuizResponse {
    pub fn new(quiz: QuizResult, model: String) -> Self {
        Self {
            quiz,
            model,
            generated_at: Utc::now(),
        }
    }
}
