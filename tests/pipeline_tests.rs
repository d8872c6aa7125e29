mod common;

use std::sync::Arc;

use common::{four_question_quiz, hello_world_lines, StubChatCompleter, StubTranscriptFetcher};
use hangtube_server::{
    errors::PipelineError,
    models::domain::ChoiceLabel,
    services::{prompt_builder::PromptMode, QuizPipeline},
};

fn pipeline(fetcher: &StubTranscriptFetcher, chat: &StubChatCompleter) -> QuizPipeline {
    QuizPipeline::new(Arc::new(fetcher.clone()), Arc::new(chat.clone()))
}

#[tokio::test]
async fn run_quiz_end_to_end() {
    let fetcher = StubTranscriptFetcher::new(hello_world_lines());
    let chat = StubChatCompleter::new(&four_question_quiz());

    let result = pipeline(&fetcher, &chat)
        .run_quiz("abc123")
        .await
        .expect("pipeline should succeed");

    assert_eq!(result.count(), 4);
    assert_eq!(result.transcript_id(), "abc123");
    assert_eq!(result.questions()[0].correct_answer, ChoiceLabel::A);

    let prompts = chat.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].mode, PromptMode::MultipleChoice);
    assert!(prompts[0].user_message.ends_with("hello world"));
}

#[tokio::test]
async fn run_quiz_with_broken_json_is_a_schema_error() {
    let fetcher = StubTranscriptFetcher::new(hello_world_lines());
    let chat = StubChatCompleter::new("{broken json");

    let result = pipeline(&fetcher, &chat).run_quiz("abc123").await;

    match result {
        Err(PipelineError::Schema { raw, .. }) => assert_eq!(raw, "{broken json"),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[tokio::test]
async fn run_quiz_with_blocked_provider_never_calls_the_model() {
    let fetcher = StubTranscriptFetcher::failing("blocked");
    let chat = StubChatCompleter::new(&four_question_quiz());

    let result = pipeline(&fetcher, &chat).run_quiz("abc123").await;

    match result {
        Err(PipelineError::Provider(err)) => assert_eq!(err.message, "blocked"),
        other => panic!("expected provider error, got {:?}", other),
    }
    assert_eq!(chat.call_count(), 0);
    assert_eq!(*fetcher.calls.lock().unwrap(), vec!["abc123".to_string()]);
}

#[tokio::test]
async fn runs_share_no_state() {
    let fetcher = StubTranscriptFetcher::new(hello_world_lines());
    let chat = StubChatCompleter::new(&four_question_quiz());
    let pipeline = pipeline(&fetcher, &chat);

    let (first, second) = tokio::join!(pipeline.run_quiz("abc123"), pipeline.run_quiz("def456"));

    assert_eq!(first.expect("first run").transcript_id(), "abc123");
    assert_eq!(second.expect("second run").transcript_id(), "def456");
    assert_eq!(chat.call_count(), 2);
}

#[tokio::test]
async fn free_text_questions_end_to_end() {
    let fetcher = StubTranscriptFetcher::new(hello_world_lines());
    let chat = StubChatCompleter::new(
        "Can a sandwich file taxes?\nWhy is Tuesday sticky?\nHow tall is a rumour?\nDo clouds snore?\nWho owns the colour blue?",
    );

    let questions = pipeline(&fetcher, &chat)
        .generate_free_text_questions("abc123")
        .await
        .expect("five questions");

    assert_eq!(questions.len(), 5);
    assert_eq!(questions[3], "Do clouds snore?");
    assert_eq!(chat.prompts.lock().unwrap()[0].mode, PromptMode::FreeText);
}
