use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{UpdateProfileDto, User};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    /// Applies a partial profile patch. Absent fields keep their stored
    /// value; a supplied password is re-hashed.
    #[instrument(skip(db, dto))]
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        let hashed_password = match &dto.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 password = COALESCE($4, password)
             WHERE id = $1
             RETURNING id, name, email, role, status, created_at",
        )
        .bind(user_id)
        .bind(dto.name.as_deref())
        .bind(dto.email.as_deref())
        .bind(hashed_password.as_deref())
        .fetch_optional(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::bad_request(anyhow::anyhow!("Email already in use"))
            }
            other => other.into(),
        })?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }
}
