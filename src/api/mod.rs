//! HTTP delivery layer.
//!
//! Translates requests into catalog operations and catalog errors into
//! status codes: `InvalidInput` maps to 400, `NotFound` to 404, success to
//! 200/201. This layer owns the single mutual-exclusion boundary around the
//! catalog; the core itself is lock-free. The observability envelope
//! (request metrics, per-request log line) wraps every route without
//! altering responses.

pub mod metrics;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post, put};
use axum::Router;
use tokio::sync::{Mutex, RwLock};

use crate::activity::ActivityLog;
use crate::core::Catalog;

use self::metrics::RequestMetrics;

/// Application state shared across handlers
pub struct AppState {
    /// The catalog behind the one lock that serializes its operations
    pub catalog: RwLock<Catalog>,

    /// Recent user-activity events
    pub activity: Mutex<ActivityLog>,

    /// Request counters for the metrics endpoint
    pub metrics: RequestMetrics,

    /// Service start time, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Create state around a catalog.
    pub fn new(catalog: Catalog, activity_capacity: usize) -> SharedState {
        Arc::new(Self {
            catalog: RwLock::new(catalog),
            activity: Mutex::new(ActivityLog::new(activity_capacity)),
            metrics: RequestMetrics::new(),
            started_at: Instant::now(),
        })
    }
}

pub type SharedState = Arc<AppState>;

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // Service pages
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/metrics", get(routes::metrics_snapshot))
        // Content uploads
        .route("/api/content/upload-video", post(routes::upload_video))
        .route("/api/content/upload-document", post(routes::upload_document))
        // Courses and lessons
        .route(
            "/api/courses/:course_id/lessons",
            get(routes::list_course_lessons).post(routes::create_course_lesson),
        )
        .route(
            "/api/lessons/:lesson_id",
            put(routes::update_lesson).delete(routes::delete_lesson),
        )
        .route("/api/lessons/:lesson_id/content", get(routes::lesson_content))
        // Quizzes and assignments
        .route("/api/quizzes", post(routes::create_quiz))
        .route("/api/quizzes/:quiz_id", get(routes::get_quiz))
        .route("/api/assignments", post(routes::create_assignment))
        .layer(middleware::from_fn_with_state(state.clone(), track_request))
        .with_state(state)
}

/// Observability envelope: one metrics sample and one log line per request.
/// Purely additive; never alters the response.
async fn track_request(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    state.metrics.record(response.status(), latency);
    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = latency.as_millis() as u64,
        "request handled"
    );

    response
}
