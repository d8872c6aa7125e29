use std::{env, sync::Arc};

use hangtube_server::{
    config::Config,
    errors::{AppError, AppResult},
    services::{
        providers::{OpenAiChatCompleter, YoutubeTranscriptFetcher},
        QuizPipeline, TranscriptStore,
    },
};

const DEFAULT_VIDEO_ID: &str = "j4JBzGddVgQ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuizMode {
    FreeText,
    MultipleChoice,
}

impl QuizMode {
    fn from_env() -> AppResult<Self> {
        match env::var("QUIZ_MODE").as_deref() {
            Err(_) | Ok("free-text") => Ok(QuizMode::FreeText),
            Ok("multiple-choice") => Ok(QuizMode::MultipleChoice),
            Ok(other) => Err(AppError::ConfigError(format!(
                "QUIZ_MODE must be free-text or multiple-choice, got {:?}",
                other
            ))),
        }
    }
}

/// One-shot run: fetch captions, store them, ask the model, write the result.
#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            if let AppError::ProviderError {
                hint: Some(hint), ..
            } = &err
            {
                eprintln!("\nTip: {}", hint);
            }
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<()> {
    let mut config = Config::from_env();
    if let Ok(outfile) = env::var("OUTFILE") {
        config.transcript_path = outfile.into();
    }
    let video_id = env::var("VIDEO_ID").unwrap_or_else(|_| DEFAULT_VIDEO_ID.to_string());
    let questions_path =
        env::var("QUESTIONS_OUTFILE").unwrap_or_else(|_| "absurd_questions.txt".to_string());
    let mode = QuizMode::from_env()?;

    let pipeline = QuizPipeline::new(
        Arc::new(YoutubeTranscriptFetcher::from_config(&config)?),
        Arc::new(OpenAiChatCompleter::from_config(&config)?),
    )
    .with_transcript_budget(config.transcript_budget());
    let store = TranscriptStore::new(config.transcript_path.clone());

    let transcript = pipeline.fetch_transcript(&video_id).await?;
    let path = store.save(&transcript, None).await?;
    println!(
        "Wrote {} with {} transcript lines",
        path.display(),
        transcript.count()
    );

    let output = match mode {
        QuizMode::FreeText => {
            let questions = pipeline
                .generate_free_text_questions_from_transcript(&transcript)
                .await?;
            println!("Generated {} Absurd Questions:", questions.len());
            questions.join("\n")
        }
        QuizMode::MultipleChoice => {
            let quiz = pipeline.run_quiz_from_transcript(&transcript).await?;
            println!("Generated {} absurd multiple-choice questions:", quiz.count());
            serde_json::to_string_pretty(&quiz)?
        }
    };

    println!("{}", output);
    tokio::fs::write(&questions_path, &output).await?;
    println!("\nQuestions saved to {}", questions_path);

    Ok(())
}
