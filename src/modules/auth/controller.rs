use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{User, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto, RegisterTeacherResponse};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Register a new student (auto-approved, logged in immediately)
#[utoipa::path(
    post,
    path = "/api/auth/register/student",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Student registered", body = LoginResponse),
        (status = 400, description = "Validation error or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequestDto>,
) -> Result<(StatusCode, Json<LoginResponse>), AppError> {
    let user = AuthService::register_user(&state.db, dto, UserRole::Student).await?;
    let access_token = create_access_token(user.id, &user.email, &state.jwt_config)?;
    Ok((StatusCode::CREATED, Json(LoginResponse { access_token, user })))
}

/// Register a new teacher (pending admin approval, no token issued)
#[utoipa::path(
    post,
    path = "/api/auth/register/teacher",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Teacher registered, awaiting approval", body = RegisterTeacherResponse),
        (status = 400, description = "Validation error or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequestDto>,
) -> Result<(StatusCode, Json<RegisterTeacherResponse>), AppError> {
    let user = AuthService::register_user(&state.db, dto, UserRole::Teacher).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterTeacherResponse {
            message: "Teacher registration successful. Waiting for admin approval.".to_string(),
            user,
        }),
    ))
}

/// Login and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Teacher account not approved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Return the authenticated caller's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Caller profile", body = User),
        (status = 401, description = "Unauthenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn get_me(auth_user: AuthUser) -> Json<User> {
    Json(auth_user.0)
}
