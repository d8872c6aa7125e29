pub mod quiz;
pub mod transcript;
pub use quiz::{ChoiceLabel, QuizPayload, QuizQuestion, QuizResult};
pub use transcript::{CaptionSnippet, RawLine, Transcript, TranscriptDocument, TranscriptLine};
