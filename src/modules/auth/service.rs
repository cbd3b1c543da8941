use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::approval::ApprovalStatus;
use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto};

pub struct AuthService;

impl AuthService {
    /// Creates an account with the role-dependent default status:
    /// students come out approved, teachers pending.
    #[instrument(skip(db, dto))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterRequestDto,
        role: UserRole,
    ) -> Result<User, AppError> {
        let existing: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
                .bind(&dto.email)
                .fetch_optional(db)
                .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already registered"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;
        let status = ApprovalStatus::default_for(role);

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password, role, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, email, role, status, created_at",
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(role)
        .bind(status)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            // Two concurrent registrations can both pass the pre-check;
            // the unique index on email decides the winner.
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::bad_request(anyhow::anyhow!("Email already registered"))
            }
            other => other.into(),
        })?;

        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            name: String,
            email: String,
            role: UserRole,
            status: ApprovalStatus,
            created_at: chrono::DateTime<chrono::Utc>,
            password: String,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, role, status, created_at, password
             FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid email or password")))?;

        let is_valid = verify_password(&dto.password, &row.password)?;
        if !is_valid {
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Invalid email or password"
            )));
        }

        // A teacher that is still pending (or was rejected) never gets a
        // token, even with correct credentials.
        if row.role == UserRole::Teacher && row.status != ApprovalStatus::Approved {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Teacher account is {}. Cannot log in.",
                row.status
            )));
        }

        let access_token = create_access_token(row.id, &row.email, jwt_config)?;

        Ok(LoginResponse {
            access_token,
            user: User {
                id: row.id,
                name: row.name,
                email: row.email,
                role: row.role,
                status: row.status,
                created_at: row.created_at,
            },
        })
    }
}
