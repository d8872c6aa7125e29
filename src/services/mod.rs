pub mod prompt_builder;
pub mod providers;
pub mod quiz_pipeline;
pub mod quiz_response_parser;
pub mod transcript_assembler;
pub mod transcript_normalizer;
pub mod transcript_store;

pub use quiz_pipeline::{validate_video_id, QuizPipeline};
pub use transcript_store::TranscriptStore;
