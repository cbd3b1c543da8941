use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireApprovedTeacher, RequireStudent, RequireTeacher};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Course, CourseDetail, CourseSummary, CreateCourseDto};
use super::service::CourseService;

/// List approved courses (roster excluded)
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "Approved courses, newest first", body = [CourseSummary]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_courses(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<CourseSummary>>, AppError> {
    let courses = CourseService::list_approved(&state.db).await?;
    Ok(Json(courses))
}

/// Create a course (approved teachers only; starts pending)
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created in pending state", body = Course),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Approved teacher account required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, teacher, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    RequireApprovedTeacher(teacher): RequireApprovedTeacher,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = CourseService::create(&state.db, teacher.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// List the caller's own courses, any status
#[utoipa::path(
    get,
    path = "/api/courses/my",
    responses(
        (status = 200, description = "Own courses, newest first", body = [Course]),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 403, description = "Teacher role required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, teacher))]
pub async fn get_my_courses(
    State(state): State<AppState>,
    RequireTeacher(teacher): RequireTeacher,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = CourseService::list_owned_by(&state.db, teacher.user_id()).await?;
    Ok(Json(courses))
}

/// Get one approved course with teacher info and roster
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course detail", body = CourseDetail),
        (status = 401, description = "Unauthenticated", body = ErrorResponse),
        (status = 404, description = "Course not found or not approved", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_course(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseDetail>, AppError> {
    let course = CourseService::get_approved(&state.db, id).await?;
    Ok(Json(course))
}

/// Join an approved course as a student
#[utoipa::path(
    put,
    path = "/api/courses/{id}/join",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Enrolled", body = MessageResponse),
        (status = 400, description = "Already enrolled", body = ErrorResponse),
        (status = 403, description = "Student role required", body = ErrorResponse),
        (status = 404, description = "Course not found or not approved", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, student))]
pub async fn join_course(
    State(state): State<AppState>,
    RequireStudent(student): RequireStudent,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    CourseService::enroll(&state.db, id, student.user_id()).await?;
    Ok(Json(MessageResponse {
        message: "Successfully joined the course".to_string(),
    }))
}
