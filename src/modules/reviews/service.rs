use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::approval::ApprovalStatus;
use crate::utils::errors::AppError;

use super::model::{CourseReview, CreateReviewDto, MyReview, Review};

/// Returns Ok only when the course exists and is approved; anything else
/// is a 404 with the given message (a non-approved course is not
/// distinguishable from a missing one).
async fn require_approved_course(
    db: &PgPool,
    course_id: Uuid,
    message: &'static str,
) -> Result<(), AppError> {
    let status: Option<ApprovalStatus> =
        sqlx::query_scalar("SELECT status FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(db)
            .await?;

    match status {
        Some(ApprovalStatus::Approved) => Ok(()),
        _ => Err(AppError::not_found(anyhow::anyhow!("{}", message))),
    }
}

pub struct ReviewService;

impl ReviewService {
    /// Creates a pending review. Requires enrollment in an approved course
    /// and at most one review per (student, course) pair, ever — a rejected
    /// review cannot be resubmitted.
    #[instrument(skip(db, dto))]
    pub async fn submit(
        db: &PgPool,
        course_id: Uuid,
        student_id: Uuid,
        dto: CreateReviewDto,
    ) -> Result<Review, AppError> {
        require_approved_course(db, course_id, "Course not available for review").await?;

        let enrolled: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM enrollments WHERE course_id = $1 AND student_id = $2",
        )
        .bind(course_id)
        .bind(student_id)
        .fetch_optional(db)
        .await?;

        if enrolled.is_none() {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "Enrollment required to review"
            )));
        }

        let existing: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM reviews WHERE course_id = $1 AND student_id = $2",
        )
        .bind(course_id)
        .bind(student_id)
        .fetch_optional(db)
        .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Review already submitted"
            )));
        }

        let review = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (comment, student_id, course_id, status)
             VALUES ($1, $2, $3, $4)
             RETURNING id, comment, student_id, course_id, status, created_at",
        )
        .bind(&dto.comment)
        .bind(student_id)
        .bind(course_id)
        .bind(ApprovalStatus::Pending)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            // The (student_id, course_id) unique index closes the window
            // between the duplicate pre-check and this insert.
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::bad_request(anyhow::anyhow!("Review already submitted"))
            }
            other => other.into(),
        })?;

        Ok(review)
    }

    /// Approved reviews for an approved course, newest first.
    #[instrument(skip(db))]
    pub async fn list_approved_for_course(
        db: &PgPool,
        course_id: Uuid,
    ) -> Result<Vec<CourseReview>, AppError> {
        require_approved_course(db, course_id, "Course not found or not available").await?;

        let reviews = sqlx::query_as::<_, CourseReview>(
            "SELECT r.id, r.comment, u.name AS student_name, r.created_at
             FROM reviews r
             JOIN users u ON u.id = r.student_id
             WHERE r.course_id = $1 AND r.status = $2
             ORDER BY r.created_at DESC",
        )
        .bind(course_id)
        .bind(ApprovalStatus::Approved)
        .fetch_all(db)
        .await?;

        Ok(reviews)
    }

    /// The caller's own reviews, any status, newest first.
    #[instrument(skip(db))]
    pub async fn list_owned_by(db: &PgPool, student_id: Uuid) -> Result<Vec<MyReview>, AppError> {
        let reviews = sqlx::query_as::<_, MyReview>(
            "SELECT r.id, r.comment, r.status, r.course_id, c.title AS course_title, r.created_at
             FROM reviews r
             JOIN courses c ON c.id = r.course_id
             WHERE r.student_id = $1
             ORDER BY r.created_at DESC",
        )
        .bind(student_id)
        .fetch_all(db)
        .await?;

        Ok(reviews)
    }
}
