//! Moderation DTOs: dashboard stats, pending queues, and decision
//! responses for the three moderated entities.

use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::approval::ApprovalStatus;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_students: i64,
    pub total_teachers: i64,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PendingTeacher {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PendingCourse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub teacher_name: String,
    pub teacher_email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PendingReview {
    pub id: Uuid,
    pub comment: String,
    pub student_name: String,
    pub student_email: String,
    pub course_title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherDecisionResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: ApprovalStatus,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDecisionResponse {
    pub id: Uuid,
    pub title: String,
    pub status: ApprovalStatus,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewDecisionResponse {
    pub id: Uuid,
    pub comment: String,
    pub status: ApprovalStatus,
    pub message: String,
}
