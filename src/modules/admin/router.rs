use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{
    approve_course, approve_review, approve_teacher, get_pending_courses, get_pending_reviews,
    get_pending_teachers, get_stats, reject_course, reject_review, reject_teacher,
};

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/teachers/pending", get(get_pending_teachers))
        .route("/teachers/{id}/approve", put(approve_teacher))
        .route("/teachers/{id}/reject", put(reject_teacher))
        .route("/courses/pending", get(get_pending_courses))
        .route("/courses/{id}/approve", put(approve_course))
        .route("/courses/{id}/reject", put(reject_course))
        .route("/reviews/pending", get(get_pending_reviews))
        .route("/reviews/{id}/approve", put(approve_review))
        .route("/reviews/{id}/reject", put(reject_review))
}
