use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::prompts::MULTIPLE_CHOICE_QUESTION_COUNT,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateQuestionsRequest, GenerateQuizRequest, QuizSource},
        response::{FreeTextQuestionsResponse, QuizResponse},
    },
};

/// Free-text questions from the transcript stored by `/fetch`.
#[get("/generate_questions")]
async fn generate_questions_from_stored(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let transcript = state.transcript_store.load().await?;
    let questions = state
        .pipeline
        .generate_free_text_questions_from_transcript(&transcript)
        .await?;

    Ok(HttpResponse::Ok().json(FreeTextQuestionsResponse::new(
        transcript.video_id(),
        questions,
        state.pipeline.model_name(),
    )))
}

#[post("/generate_questions")]
async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let questions = state
        .pipeline
        .generate_free_text_questions(&request.video_id)
        .await?;

    Ok(HttpResponse::Ok().json(FreeTextQuestionsResponse::new(
        request.video_id,
        questions,
        state.pipeline.model_name(),
    )))
}

#[post("/generate_quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();

    let quiz = match request.into_inner().into_source()? {
        QuizSource::VideoId(video_id) => {
            log::info!("[{}] Generating quiz for video {}", request_id, video_id);
            state.pipeline.run_quiz(&video_id).await?
        }
        QuizSource::Transcript(transcript) => {
            log::info!(
                "[{}] Generating quiz from supplied transcript {} ({} lines)",
                request_id,
                transcript.video_id(),
                transcript.count()
            );
            state.pipeline.run_quiz_from_transcript(&transcript).await?
        }
    };

    if quiz.count() != MULTIPLE_CHOICE_QUESTION_COUNT {
        log::warn!(
            "[{}] Model returned {} questions instead of {}",
            request_id,
            quiz.count(),
            MULTIPLE_CHOICE_QUESTION_COUNT
        );
    }

    Ok(HttpResponse::Ok().json(QuizResponse::new(quiz, state.pipeline.model_name())))
}
