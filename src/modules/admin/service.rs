//! Moderation logic. All six decision operations route through the shared
//! transition rule in [`crate::approval`]: fetch the current status, prove
//! the move is legal, then update guarded by `status = 'pending'` so a
//! racing admin cannot decide the same entity twice.

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::approval::ApprovalStatus;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

use super::model::{
    CourseDecisionResponse, PendingCourse, PendingReview, PendingTeacher, ReviewDecisionResponse,
    StatsResponse, TeacherDecisionResponse,
};

fn decision_verb(to: ApprovalStatus) -> &'static str {
    match to {
        ApprovalStatus::Approved => "approved",
        ApprovalStatus::Rejected => "rejected",
        ApprovalStatus::Pending => "left pending", // unreachable via the routes
    }
}

pub struct AdminService;

impl AdminService {
    /// Counts of approved students and approved teachers.
    #[instrument(skip(db))]
    pub async fn stats(db: &PgPool) -> Result<StatsResponse, AppError> {
        let total_students: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE role = $1 AND status = $2",
        )
        .bind(UserRole::Student)
        .bind(ApprovalStatus::Approved)
        .fetch_one(db)
        .await?;

        let total_teachers: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE role = $1 AND status = $2",
        )
        .bind(UserRole::Teacher)
        .bind(ApprovalStatus::Approved)
        .fetch_one(db)
        .await?;

        Ok(StatsResponse {
            total_students,
            total_teachers,
        })
    }

    #[instrument(skip(db))]
    pub async fn pending_teachers(db: &PgPool) -> Result<Vec<PendingTeacher>, AppError> {
        let teachers = sqlx::query_as::<_, PendingTeacher>(
            "SELECT id, name, email, created_at FROM users
             WHERE role = $1 AND status = $2
             ORDER BY created_at ASC",
        )
        .bind(UserRole::Teacher)
        .bind(ApprovalStatus::Pending)
        .fetch_all(db)
        .await?;

        Ok(teachers)
    }

    #[instrument(skip(db))]
    pub async fn decide_teacher(
        db: &PgPool,
        teacher_id: Uuid,
        to: ApprovalStatus,
    ) -> Result<TeacherDecisionResponse, AppError> {
        let current: ApprovalStatus = sqlx::query_scalar(
            "SELECT status FROM users WHERE id = $1 AND role = $2",
        )
        .bind(teacher_id)
        .bind(UserRole::Teacher)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        current
            .transition(to)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Teacher is not pending approval")))?;

        #[derive(sqlx::FromRow)]
        struct Row {
            id: Uuid,
            name: String,
            email: String,
            status: ApprovalStatus,
        }

        let row = sqlx::query_as::<_, Row>(
            "UPDATE users SET status = $2 WHERE id = $1 AND status = $3
             RETURNING id, name, email, status",
        )
        .bind(teacher_id)
        .bind(to)
        .bind(ApprovalStatus::Pending)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("Teacher is not pending approval"))
        })?;

        Ok(TeacherDecisionResponse {
            id: row.id,
            name: row.name,
            email: row.email,
            status: row.status,
            message: format!("Teacher {} successfully.", decision_verb(to)),
        })
    }

    #[instrument(skip(db))]
    pub async fn pending_courses(db: &PgPool) -> Result<Vec<PendingCourse>, AppError> {
        let courses = sqlx::query_as::<_, PendingCourse>(
            "SELECT c.id, c.title, c.description, c.created_at,
                    u.name AS teacher_name, u.email AS teacher_email
             FROM courses c
             JOIN users u ON u.id = c.teacher_id
             WHERE c.status = $1
             ORDER BY c.created_at ASC",
        )
        .bind(ApprovalStatus::Pending)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn decide_course(
        db: &PgPool,
        course_id: Uuid,
        to: ApprovalStatus,
    ) -> Result<CourseDecisionResponse, AppError> {
        let current: ApprovalStatus =
            sqlx::query_scalar("SELECT status FROM courses WHERE id = $1")
                .bind(course_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))?;

        current
            .transition(to)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Course is not pending approval")))?;

        #[derive(sqlx::FromRow)]
        struct Row {
            id: Uuid,
            title: String,
            status: ApprovalStatus,
        }

        let row = sqlx::query_as::<_, Row>(
            "UPDATE courses SET status = $2 WHERE id = $1 AND status = $3
             RETURNING id, title, status",
        )
        .bind(course_id)
        .bind(to)
        .bind(ApprovalStatus::Pending)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("Course is not pending approval"))
        })?;

        Ok(CourseDecisionResponse {
            id: row.id,
            title: row.title,
            status: row.status,
            message: format!("Course {} successfully.", decision_verb(to)),
        })
    }

    #[instrument(skip(db))]
    pub async fn pending_reviews(db: &PgPool) -> Result<Vec<PendingReview>, AppError> {
        let reviews = sqlx::query_as::<_, PendingReview>(
            "SELECT r.id, r.comment, r.created_at,
                    u.name AS student_name, u.email AS student_email,
                    c.title AS course_title
             FROM reviews r
             JOIN users u ON u.id = r.student_id
             JOIN courses c ON c.id = r.course_id
             WHERE r.status = $1
             ORDER BY r.created_at ASC",
        )
        .bind(ApprovalStatus::Pending)
        .fetch_all(db)
        .await?;

        Ok(reviews)
    }

    #[instrument(skip(db))]
    pub async fn decide_review(
        db: &PgPool,
        review_id: Uuid,
        to: ApprovalStatus,
    ) -> Result<ReviewDecisionResponse, AppError> {
        let current: ApprovalStatus =
            sqlx::query_scalar("SELECT status FROM reviews WHERE id = $1")
                .bind(review_id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Review not found")))?;

        current
            .transition(to)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Review is not pending approval")))?;

        #[derive(sqlx::FromRow)]
        struct Row {
            id: Uuid,
            comment: String,
            status: ApprovalStatus,
        }

        let row = sqlx::query_as::<_, Row>(
            "UPDATE reviews SET status = $2 WHERE id = $1 AND status = $3
             RETURNING id, comment, status",
        )
        .bind(review_id)
        .bind(to)
        .bind(ApprovalStatus::Pending)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("Review is not pending approval"))
        })?;

        Ok(ReviewDecisionResponse {
            id: row.id,
            comment: row.comment,
            status: row.status,
            message: format!("Review {} successfully.", decision_verb(to)),
        })
    }
}
