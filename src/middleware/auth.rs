use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::approval::ApprovalStatus;
use crate::modules::users::model::{User, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that authenticates the request.
///
/// Verifies the bearer token, then resolves its subject to a live account
/// row (credential hash excluded). A valid token whose account has since
/// been deleted fails exactly like a bad token: the client only ever sees
/// a generic 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.id
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.0.role == role
    }

    /// The only role/status combination allowed to create courses.
    pub fn is_approved_teacher(&self) -> bool {
        self.0.role == UserRole::Teacher && self.0.status == ApprovalStatus::Approved
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("No token provided")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("No token provided")))?;

        let claims = verify_token(token, &state.jwt_config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))?;

        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, status, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid or expired token")))?;

        Ok(AuthUser(user))
    }
}
