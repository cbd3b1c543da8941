use learnhub::approval::ApprovalStatus;
use learnhub::modules::users::model::UserRole;
use learnhub::utils::password::hash_password;
#[allow(unused_imports)]
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[allow(dead_code)]
pub struct TestCourse {
    pub id: Uuid,
    pub title: String,
    pub teacher_id: Uuid,
}

#[allow(dead_code)]
pub struct TestReview {
    pub id: Uuid,
    pub course_id: Uuid,
    pub student_id: Uuid,
}

/// Create a test user with the given role and approval status
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
    role: UserRole,
    status: ApprovalStatus,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO users (name, email, password, role, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind("Test User")
    .bind(email)
    .bind(hashed)
    .bind(role)
    .bind(status)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

#[allow(dead_code)]
pub async fn create_test_course(
    tx: &mut Transaction<'_, Postgres>,
    title: &str,
    teacher_id: Uuid,
    status: ApprovalStatus,
) -> TestCourse {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO courses (title, description, teacher_id, status)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind("Test course description")
    .bind(teacher_id)
    .bind(status)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestCourse {
        id,
        title: title.to_string(),
        teacher_id,
    }
}

#[allow(dead_code)]
pub async fn enroll_student(
    tx: &mut Transaction<'_, Postgres>,
    course_id: Uuid,
    student_id: Uuid,
) {
    sqlx::query("INSERT INTO enrollments (course_id, student_id) VALUES ($1, $2)")
        .bind(course_id)
        .bind(student_id)
        .execute(&mut **tx)
        .await
        .unwrap();
}

#[allow(dead_code)]
pub async fn create_test_review(
    tx: &mut Transaction<'_, Postgres>,
    course_id: Uuid,
    student_id: Uuid,
    comment: &str,
    status: ApprovalStatus,
) -> TestReview {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO reviews (course_id, student_id, comment, status)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(course_id)
    .bind(student_id)
    .bind(comment)
    .bind(status)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestReview {
        id,
        course_id,
        student_id,
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_title() -> String {
    format!("Course {}", Uuid::new_v4())
}
