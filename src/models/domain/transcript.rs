use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    errors::{PipelineError, PipelineResult},
    services::{transcript_assembler, validate_video_id},
};

/// Caption line exactly as a provider hands it over.
#[derive(Clone, Debug, PartialEq)]
pub enum RawLine {
    /// Typed snippet whose fields are read directly.
    Snippet(CaptionSnippet),
    /// Loosely typed record: a mapping, a positional array, or anything else.
    Json(Value),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CaptionSnippet {
    pub start: Option<f64>,
    pub duration: Option<f64>,
    pub text: Option<String>,
}

impl From<CaptionSnippet> for RawLine {
    fn from(snippet: CaptionSnippet) -> Self {
        RawLine::Snippet(snippet)
    }
}

impl From<Value> for RawLine {
    fn from(value: Value) -> Self {
        RawLine::Json(value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub start: f64,
    pub duration: Option<f64>,
    pub text: String,
}

/// Ordered caption lines of one video. `count` always equals the number of lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transcript {
    video_id: String,
    count: usize,
    #[serde(rename = "transcript")]
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub(crate) fn from_lines(video_id: String, lines: Vec<TranscriptLine>) -> Self {
        Self {
            video_id,
            count: lines.len(),
            lines,
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Serialized transcript as written to disk or posted by a caller.
///
/// Lines are kept as raw JSON so they go through the same normalization as
/// freshly fetched captions.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TranscriptDocument {
    pub video_id: String,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub transcript: Vec<Value>,
}

impl TranscriptDocument {
    pub fn into_transcript(self) -> PipelineResult<Transcript> {
        validate_video_id(&self.video_id)?;

        if let Some(count) = self.count {
            if count != self.transcript.len() {
                return Err(PipelineError::input(format!(
                    "transcript count is {} but {} lines were supplied",
                    count,
                    self.transcript.len()
                )));
            }
        }

        Ok(transcript_assembler::assemble(
            self.video_id,
            self.transcript.into_iter().map(RawLine::Json),
        ))
    }
}
