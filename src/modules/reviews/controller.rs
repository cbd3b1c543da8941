use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireStudent;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CourseReview, CreateReviewDto, MyReview, SubmitReviewResponse};
use super::service::ReviewService;

/// Submit a review for an enrolled course (starts pending)
#[utoipa::path(
    post,
    path = "/api/courses/{id}/reviews",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review submitted, awaiting approval", body = SubmitReviewResponse),
        (status = 400, description = "Review already submitted", body = ErrorResponse),
        (status = 403, description = "Student role and enrollment required", body = ErrorResponse),
        (status = 404, description = "Course not found or not approved", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
#[instrument(skip(state, student, dto))]
pub async fn submit_review(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    Path(course_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<SubmitReviewResponse>), AppError> {
    let review = ReviewService::submit(&state.db, course_id, student.user_id(), dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitReviewResponse {
            message: "Review submitted. Awaiting approval.".to_string(),
            review,
        }),
    ))
}

/// List approved reviews for an approved course
#[utoipa::path(
    get,
    path = "/api/courses/{id}/reviews",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Approved reviews, newest first", body = [CourseReview]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Course not found or not approved", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_course_reviews(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<CourseReview>>, AppError> {
    let reviews = ReviewService::list_approved_for_course(&state.db, course_id).await?;
    Ok(Json(reviews))
}

/// List the caller's own reviews, any status
#[utoipa::path(
    get,
    path = "/api/reviews/my",
    responses(
        (status = 200, description = "Own reviews, newest first", body = [MyReview]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Reviews"
)]
#[instrument(skip(state, student))]
pub async fn get_my_reviews(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
) -> Result<Json<Vec<MyReview>>, AppError> {
    let reviews = ReviewService::list_owned_by(&state.db, student.user_id()).await?;
    Ok(Json(reviews))
}
