use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::approval::ApprovalStatus;

/// A course as stored. The roster lives in the `enrollments` table and is
/// joined in only where a response needs it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub teacher_id: Uuid,
    pub status: ApprovalStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Listing entry for `GET /api/courses`: teacher name attached, roster
/// deliberately excluded.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub teacher_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Full view of a single approved course, roster in enrollment order.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: ApprovalStatus,
    pub teacher: TeacherInfo,
    pub students: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_course_dto_rejects_empty_fields() {
        let ok = CreateCourseDto {
            title: "C101".to_string(),
            description: "Intro".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty_title = CreateCourseDto {
            title: "".to_string(),
            description: "Intro".to_string(),
        };
        assert!(empty_title.validate().is_err());

        let empty_description = CreateCourseDto {
            title: "C101".to_string(),
            description: "".to_string(),
        };
        assert!(empty_description.validate().is_err());
    }

    #[test]
    fn course_serializes_status() {
        let course = Course {
            id: Uuid::new_v4(),
            title: "C101".to_string(),
            description: "Intro".to_string(),
            teacher_id: Uuid::new_v4(),
            status: ApprovalStatus::Pending,
            created_at: chrono::Utc::now(),
        };
        let serialized = serde_json::to_string(&course).unwrap();
        assert!(serialized.contains("\"pending\""));
    }
}
