use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::approval::ApprovalStatus;
use crate::utils::errors::AppError;

use super::model::{Course, CourseDetail, CourseSummary, CreateCourseDto, TeacherInfo};

pub struct CourseService;

impl CourseService {
    /// Creates a course owned by `teacher_id`, always in `pending` state.
    /// The approved-teacher requirement is enforced by the route guard.
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        teacher_id: Uuid,
        dto: CreateCourseDto,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, description, teacher_id, status)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, description, teacher_id, status, created_at",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(teacher_id)
        .bind(ApprovalStatus::Pending)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    /// All approved courses, newest first, with the teacher's display name.
    #[instrument(skip(db))]
    pub async fn list_approved(db: &PgPool) -> Result<Vec<CourseSummary>, AppError> {
        let courses = sqlx::query_as::<_, CourseSummary>(
            "SELECT c.id, c.title, c.description, u.name AS teacher_name, c.created_at
             FROM courses c
             JOIN users u ON u.id = c.teacher_id
             WHERE c.status = $1
             ORDER BY c.created_at DESC",
        )
        .bind(ApprovalStatus::Approved)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    /// All courses owned by `teacher_id`, any status, newest first.
    #[instrument(skip(db))]
    pub async fn list_owned_by(db: &PgPool, teacher_id: Uuid) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, teacher_id, status, created_at
             FROM courses
             WHERE teacher_id = $1
             ORDER BY created_at DESC",
        )
        .bind(teacher_id)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    /// One approved course with teacher info and the roster in enrollment
    /// order. A pending or rejected course is indistinguishable from a
    /// missing one: both are 404.
    #[instrument(skip(db))]
    pub async fn get_approved(db: &PgPool, course_id: Uuid) -> Result<CourseDetail, AppError> {
        #[derive(sqlx::FromRow)]
        struct Row {
            id: Uuid,
            title: String,
            description: String,
            status: ApprovalStatus,
            created_at: chrono::DateTime<chrono::Utc>,
            teacher_id: Uuid,
            teacher_name: String,
            teacher_email: String,
        }

        let row = sqlx::query_as::<_, Row>(
            "SELECT c.id, c.title, c.description, c.status, c.created_at,
                    u.id AS teacher_id, u.name AS teacher_name, u.email AS teacher_email
             FROM courses c
             JOIN users u ON u.id = c.teacher_id
             WHERE c.id = $1 AND c.status = $2",
        )
        .bind(course_id)
        .bind(ApprovalStatus::Approved)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found or not available")))?;

        let students: Vec<Uuid> = sqlx::query_scalar(
            "SELECT student_id FROM enrollments WHERE course_id = $1 ORDER BY enrolled_at ASC",
        )
        .bind(course_id)
        .fetch_all(db)
        .await?;

        Ok(CourseDetail {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status,
            teacher: TeacherInfo {
                id: row.teacher_id,
                name: row.teacher_name,
                email: row.teacher_email,
            },
            students,
            created_at: row.created_at,
        })
    }

    /// Enrolls `student_id` in an approved course. The composite primary
    /// key on `enrollments` makes the roster duplicate-free even when two
    /// join requests race past the pre-check.
    #[instrument(skip(db))]
    pub async fn enroll(db: &PgPool, course_id: Uuid, student_id: Uuid) -> Result<(), AppError> {
        let status: Option<ApprovalStatus> =
            sqlx::query_scalar("SELECT status FROM courses WHERE id = $1")
                .bind(course_id)
                .fetch_optional(db)
                .await?;

        match status {
            Some(ApprovalStatus::Approved) => {}
            _ => {
                return Err(AppError::not_found(anyhow::anyhow!(
                    "Course not found or not available for joining"
                )));
            }
        }

        let already_enrolled: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM enrollments WHERE course_id = $1 AND student_id = $2",
        )
        .bind(course_id)
        .bind(student_id)
        .fetch_optional(db)
        .await?;

        if already_enrolled.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Already enrolled in this course"
            )));
        }

        sqlx::query("INSERT INTO enrollments (course_id, student_id) VALUES ($1, $2)")
            .bind(course_id)
            .bind(student_id)
            .execute(db)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    AppError::bad_request(anyhow::anyhow!("Already enrolled in this course"))
                }
                other => other.into(),
            })?;

        Ok(())
    }
}
