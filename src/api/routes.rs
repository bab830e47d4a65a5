//! HTTP route handlers.
//!
//! Each handler is a thin translation: deserialize the payload, run one
//! catalog operation under the lock, map the result onto a status code and
//! JSON body. Write operations also record a user-activity event.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::metrics::MetricsSnapshot;
use super::SharedState;
use crate::activity::{ActivityEvent, ActivityStatus};
use crate::core::{CatalogError, CreateAssignment, CreateLesson, CreateQuiz, UpdateLesson};
use crate::domain::{Assignment, Lesson, LessonContent, Quiz};
use crate::health::HealthReport;

/// Actor recorded for unauthenticated requests. There is no auth layer, so
/// every request maps to this actor.
const ANONYMOUS_ACTOR: &str = "anonymous";

/// Catalog errors rendered as HTTP responses
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            CatalogError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        (status, Json(ErrorBody {
            error: self.0.to_string(),
        }))
            .into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

async fn record_activity(state: &SharedState, event: ActivityEvent) {
    state.activity.lock().await.record(event);
}

/// GET /
pub async fn index() -> &'static str {
    concat!("coursecat ", env!("CARGO_PKG_VERSION"))
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthReport> {
    Json(HealthReport::collect(state.started_at.elapsed().as_secs()))
}

/// GET /metrics
pub async fn metrics_snapshot(State(state): State<SharedState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

// === Content uploads ===

#[derive(Debug, Default, Deserialize)]
pub struct UploadRequest {
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}

/// POST /api/content/upload-video
pub async fn upload_video(
    State(state): State<SharedState>,
    Json(body): Json<UploadRequest>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let name = body.filename.unwrap_or_default();
    let filename = state.catalog.write().await.registry_mut().register_video(&name)?;

    record_activity(
        &state,
        ActivityEvent::new(ANONYMOUS_ACTOR, "upload_video", ActivityStatus::Success)
            .with_target("video", filename.as_str()),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Video uploaded successfully".to_string(),
            filename,
        }),
    ))
}

/// POST /api/content/upload-document
pub async fn upload_document(
    State(state): State<SharedState>,
    Json(body): Json<UploadRequest>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let name = body.filename.unwrap_or_default();
    let filename = state
        .catalog
        .write()
        .await
        .registry_mut()
        .register_document(&name)?;

    record_activity(
        &state,
        ActivityEvent::new(ANONYMOUS_ACTOR, "upload_document", ActivityStatus::Success)
            .with_target("document", filename.as_str()),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Document uploaded successfully".to_string(),
            filename,
        }),
    ))
}

// === Courses and lessons ===

/// GET /api/courses/:course_id/lessons
pub async fn list_course_lessons(
    State(state): State<SharedState>,
    Path(course_id): Path<i64>,
) -> Json<Vec<Lesson>> {
    Json(state.catalog.read().await.list_lessons_for_course(course_id))
}

/// POST /api/courses/:course_id/lessons
pub async fn create_course_lesson(
    State(state): State<SharedState>,
    Path(course_id): Path<i64>,
    Json(body): Json<CreateLesson>,
) -> Result<(StatusCode, Json<Lesson>), ApiError> {
    let lesson = state.catalog.write().await.create_lesson(course_id, body)?;

    record_activity(
        &state,
        ActivityEvent::new(ANONYMOUS_ACTOR, "create_lesson", ActivityStatus::Success)
            .with_target("lesson", lesson.id.to_string()),
    )
    .await;

    Ok((StatusCode::CREATED, Json(lesson)))
}

/// PUT /api/lessons/:lesson_id
pub async fn update_lesson(
    State(state): State<SharedState>,
    Path(lesson_id): Path<i64>,
    Json(body): Json<UpdateLesson>,
) -> Result<Json<Lesson>, ApiError> {
    let lesson = state.catalog.write().await.update_lesson(lesson_id, body)?;

    record_activity(
        &state,
        ActivityEvent::new(ANONYMOUS_ACTOR, "update_lesson", ActivityStatus::Success)
            .with_target("lesson", lesson.id.to_string()),
    )
    .await;

    Ok(Json(lesson))
}

/// DELETE /api/lessons/:lesson_id
pub async fn delete_lesson(
    State(state): State<SharedState>,
    Path(lesson_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.catalog.write().await.delete_lesson(lesson_id)?;

    record_activity(
        &state,
        ActivityEvent::new(ANONYMOUS_ACTOR, "delete_lesson", ActivityStatus::Success)
            .with_target("lesson", lesson_id.to_string()),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Lesson deleted successfully".to_string(),
    }))
}

/// GET /api/lessons/:lesson_id/content
pub async fn lesson_content(
    State(state): State<SharedState>,
    Path(lesson_id): Path<i64>,
) -> Result<Json<LessonContent>, ApiError> {
    let content = state.catalog.read().await.get_lesson_content(lesson_id)?;
    Ok(Json(content))
}

// === Quizzes and assignments ===

/// POST /api/quizzes
pub async fn create_quiz(
    State(state): State<SharedState>,
    Json(body): Json<CreateQuiz>,
) -> Result<(StatusCode, Json<Quiz>), ApiError> {
    let quiz = state.catalog.write().await.create_quiz(body)?;

    record_activity(
        &state,
        ActivityEvent::new(ANONYMOUS_ACTOR, "create_quiz", ActivityStatus::Success)
            .with_target("quiz", quiz.id.to_string()),
    )
    .await;

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// GET /api/quizzes/:quiz_id
pub async fn get_quiz(
    State(state): State<SharedState>,
    Path(quiz_id): Path<i64>,
) -> Result<Json<Quiz>, ApiError> {
    let quiz = state.catalog.read().await.get_quiz(quiz_id)?;
    Ok(Json(quiz))
}

/// POST /api/assignments
pub async fn create_assignment(
    State(state): State<SharedState>,
    Json(body): Json<CreateAssignment>,
) -> Result<(StatusCode, Json<Assignment>), ApiError> {
    let assignment = state.catalog.write().await.create_assignment(body)?;

    record_activity(
        &state,
        ActivityEvent::new(ANONYMOUS_ACTOR, "create_assignment", ActivityStatus::Success)
            .with_target("assignment", assignment.id.to_string()),
    )
    .await;

    Ok((StatusCode::CREATED, Json(assignment)))
}
