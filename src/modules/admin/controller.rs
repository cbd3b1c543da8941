//! Moderation handlers. Every route here sits behind the `require_admin`
//! layer applied in the top-level router.

use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::approval::ApprovalStatus;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{
    CourseDecisionResponse, PendingCourse, PendingReview, PendingTeacher, ReviewDecisionResponse,
    StatsResponse, TeacherDecisionResponse,
};
use super::service::AdminService;

/// Approved student and teacher counts
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Dashboard counts", body = StatsResponse),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = AdminService::stats(&state.db).await?;
    Ok(Json(stats))
}

/// Teachers awaiting a decision
#[utoipa::path(
    get,
    path = "/api/admin/teachers/pending",
    responses(
        (status = 200, description = "Pending teachers", body = [PendingTeacher]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_pending_teachers(
    State(state): State<AppState>,
) -> Result<Json<Vec<PendingTeacher>>, AppError> {
    let teachers = AdminService::pending_teachers(&state.db).await?;
    Ok(Json(teachers))
}

/// Approve a pending teacher
#[utoipa::path(
    put,
    path = "/api/admin/teachers/{id}/approve",
    params(("id" = Uuid, Path, description = "Teacher account id")),
    responses(
        (status = 200, description = "Teacher approved", body = TeacherDecisionResponse),
        (status = 400, description = "Teacher is not pending approval", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn approve_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherDecisionResponse>, AppError> {
    let response = AdminService::decide_teacher(&state.db, id, ApprovalStatus::Approved).await?;
    Ok(Json(response))
}

/// Reject a pending teacher
#[utoipa::path(
    put,
    path = "/api/admin/teachers/{id}/reject",
    params(("id" = Uuid, Path, description = "Teacher account id")),
    responses(
        (status = 200, description = "Teacher rejected", body = TeacherDecisionResponse),
        (status = 400, description = "Teacher is not pending approval", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn reject_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherDecisionResponse>, AppError> {
    let response = AdminService::decide_teacher(&state.db, id, ApprovalStatus::Rejected).await?;
    Ok(Json(response))
}

/// Courses awaiting a decision
#[utoipa::path(
    get,
    path = "/api/admin/courses/pending",
    responses(
        (status = 200, description = "Pending courses", body = [PendingCourse]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_pending_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<PendingCourse>>, AppError> {
    let courses = AdminService::pending_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Approve a pending course
#[utoipa::path(
    put,
    path = "/api/admin/courses/{id}/approve",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course approved", body = CourseDecisionResponse),
        (status = 400, description = "Course is not pending approval", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn approve_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseDecisionResponse>, AppError> {
    let response = AdminService::decide_course(&state.db, id, ApprovalStatus::Approved).await?;
    Ok(Json(response))
}

/// Reject a pending course
#[utoipa::path(
    put,
    path = "/api/admin/courses/{id}/reject",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course rejected", body = CourseDecisionResponse),
        (status = 400, description = "Course is not pending approval", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn reject_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseDecisionResponse>, AppError> {
    let response = AdminService::decide_course(&state.db, id, ApprovalStatus::Rejected).await?;
    Ok(Json(response))
}

/// Reviews awaiting a decision
#[utoipa::path(
    get,
    path = "/api/admin/reviews/pending",
    responses(
        (status = 200, description = "Pending reviews", body = [PendingReview]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_pending_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<PendingReview>>, AppError> {
    let reviews = AdminService::pending_reviews(&state.db).await?;
    Ok(Json(reviews))
}

/// Approve a pending review
#[utoipa::path(
    put,
    path = "/api/admin/reviews/{id}/approve",
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review approved", body = ReviewDecisionResponse),
        (status = 400, description = "Review is not pending approval", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn approve_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReviewDecisionResponse>, AppError> {
    let response = AdminService::decide_review(&state.db, id, ApprovalStatus::Approved).await?;
    Ok(Json(response))
}

/// Reject a pending review
#[utoipa::path(
    put,
    path = "/api/admin/reviews/{id}/reject",
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review rejected", body = ReviewDecisionResponse),
        (status = 400, description = "Review is not pending approval", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn reject_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReviewDecisionResponse>, AppError> {
    let response = AdminService::decide_review(&state.db, id, ApprovalStatus::Rejected).await?;
    Ok(Json(response))
}
