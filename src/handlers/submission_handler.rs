use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::{exercise::LEVELS, messages, QUESTION_ID, QUESTION_TEXT},
    errors::AppError,
    models::dto::{
        request::{CreateSubmissionRequest, FeedbackRequest, PaginationParams},
        response::{ExerciseResponse, LevelDto},
    },
};

#[post("/submissions")]
async fn create_submission(
    state: web::Data<AppState>,
    request: web::Json<CreateSubmissionRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.submission_service.submit(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/submissions/{id}/feedback")]
async fn record_feedback(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<FeedbackRequest>,
) -> Result<HttpResponse, AppError> {
    let id = Uuid::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(messages::INVALID_SUBMISSION_ID.to_string()))?;

    let response = state
        .feedback_service
        .record_feedback(&id.to_string(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/submissions/{id}")]
async fn get_submission(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let submission = state.submission_service.get_submission(id.trim()).await?;
    Ok(HttpResponse::Ok().json(submission))
}

#[get("/submissions")]
async fn list_submissions(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    pagination.validate()?;

    let response = state
        .submission_service
        .list_submissions(pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/exercise")]
async fn get_exercise() -> HttpResponse {
    HttpResponse::Ok().json(ExerciseResponse {
        question_id: QUESTION_ID,
        question_text: QUESTION_TEXT,
        levels: LEVELS.into_iter().map(LevelDto::from).collect(),
    })
}
