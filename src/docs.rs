use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::approval::ApprovalStatus;
use crate::modules::admin::model::{
    CourseDecisionResponse, PendingCourse, PendingReview, PendingTeacher, ReviewDecisionResponse,
    StatsResponse, TeacherDecisionResponse,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto, RegisterTeacherResponse,
};
use crate::modules::courses::model::{
    Course, CourseDetail, CourseSummary, CreateCourseDto, TeacherInfo,
};
use crate::modules::reviews::model::{
    CourseReview, CreateReviewDto, MyReview, Review, SubmitReviewResponse,
};
use crate::modules::users::model::{UpdateProfileDto, User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_student,
        crate::modules::auth::controller::register_teacher,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::users::controller::update_profile,
        crate::modules::admin::controller::get_stats,
        crate::modules::admin::controller::get_pending_teachers,
        crate::modules::admin::controller::approve_teacher,
        crate::modules::admin::controller::reject_teacher,
        crate::modules::admin::controller::get_pending_courses,
        crate::modules::admin::controller::approve_course,
        crate::modules::admin::controller::reject_course,
        crate::modules::admin::controller::get_pending_reviews,
        crate::modules::admin::controller::approve_review,
        crate::modules::admin::controller::reject_review,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_my_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::join_course,
        crate::modules::reviews::controller::submit_review,
        crate::modules::reviews::controller::list_course_reviews,
        crate::modules::reviews::controller::get_my_reviews,
    ),
    components(
        schemas(
            User,
            UserRole,
            ApprovalStatus,
            UpdateProfileDto,
            RegisterRequestDto,
            RegisterTeacherResponse,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            StatsResponse,
            PendingTeacher,
            PendingCourse,
            PendingReview,
            TeacherDecisionResponse,
            CourseDecisionResponse,
            ReviewDecisionResponse,
            Course,
            CourseSummary,
            CourseDetail,
            TeacherInfo,
            CreateCourseDto,
            Review,
            CourseReview,
            MyReview,
            CreateReviewDto,
            SubmitReviewResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and profile retrieval"),
        (name = "Users", description = "Profile management"),
        (name = "Admin", description = "Moderation: stats, pending queues, approve/reject"),
        (name = "Courses", description = "Course listing, creation, and enrollment"),
        (name = "Reviews", description = "Course reviews")
    ),
    info(
        title = "LearnHub API",
        description = "Learning management REST API with an admin approval workflow for teachers, courses, and reviews."
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
