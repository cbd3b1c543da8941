use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::approval::ApprovalStatus;

/// A review as stored. Immutable after creation except for its status.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub comment: String,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub status: ApprovalStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReviewDto {
    #[validate(length(min = 1))]
    pub comment: String,
}

/// Approved review shown on a course page.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct CourseReview {
    pub id: Uuid,
    pub comment: String,
    pub student_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One of the caller's own reviews, any status, with the course title.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct MyReview {
    pub id: Uuid,
    pub comment: String,
    pub status: ApprovalStatus,
    pub course_id: Uuid,
    pub course_title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitReviewResponse {
    pub message: String,
    pub review: Review,
}
