use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::FetchTranscriptRequest,
};

#[get("/transcript")]
async fn get_transcript(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let transcript = state.transcript_store.load().await?;
    Ok(HttpResponse::Ok().json(transcript))
}

/// Fetches captions for a video, stores them and returns the stored document.
#[post("/fetch")]
async fn fetch_transcript(
    state: web::Data<AppState>,
    request: web::Json<FetchTranscriptRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    // fail on a bad outfile before spending a provider call
    state.transcript_store.resolve(request.outfile.as_deref())?;

    log::info!(
        "[{}] Fetching transcript for {}",
        get_request_id(&req).unwrap_or_default(),
        request.video_id
    );

    let transcript = state.pipeline.fetch_transcript(&request.video_id).await?;
    state
        .transcript_store
        .save(&transcript, request.outfile.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(transcript))
}
