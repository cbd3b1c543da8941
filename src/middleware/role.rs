//! Role-based authorization guards.
//!
//! Guards compose in a fixed order: authenticate (via [`AuthUser`]), then
//! role check, then approval check where a route needs one. Any failure
//! short-circuits before the handler runs.
//!
//! Two forms are provided, both used by the router:
//!
//! 1. Layer middleware ([`require_admin`]) for whole route groups
//! 2. Extractors ([`RequireTeacher`], [`RequireStudent`],
//!    [`RequireApprovedTeacher`]) for per-route requirements; each hands
//!    the authenticated user to the handler so it is resolved once

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that admits only callers whose role is in `allowed_roles`.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&auth_user, &allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer for admin-only route groups (the moderation endpoints).
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor admitting teachers of any approval status.
///
/// Used where a teacher inspects their own resources (e.g. own course
/// list); creating resources additionally needs [`RequireApprovedTeacher`].
#[derive(Debug, Clone)]
pub struct RequireTeacher(pub AuthUser);

impl FromRequestParts<AppState> for RequireTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_role(&auth_user, UserRole::Teacher)?;
        Ok(RequireTeacher(auth_user))
    }
}

/// Extractor admitting students only.
#[derive(Debug, Clone)]
pub struct RequireStudent(pub AuthUser);

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_role(&auth_user, UserRole::Student)?;
        Ok(RequireStudent(auth_user))
    }
}

/// Extractor admitting only approved teachers (role = teacher AND
/// status = approved). Guards course creation.
#[derive(Debug, Clone)]
pub struct RequireApprovedTeacher(pub AuthUser);

impl FromRequestParts<AppState> for RequireApprovedTeacher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.is_approved_teacher() {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Access denied. Approved teacher account required."
            )));
        }

        Ok(RequireApprovedTeacher(auth_user))
    }
}

/// Check that the caller has exactly `required_role`.
pub fn check_role(auth_user: &AuthUser, required_role: UserRole) -> Result<(), AppError> {
    if auth_user.role() != required_role {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required role: {}",
            required_role
        )));
    }

    Ok(())
}

/// Check that the caller's role is in `allowed_roles`.
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.role()) {
        let names = allowed_roles
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Access denied. Required roles: {}",
            names
        )));
    }

    Ok(())
}
