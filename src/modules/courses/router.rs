use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::reviews::controller::{list_course_reviews, submit_review};
use crate::state::AppState;

use super::controller::{create_course, get_course, get_my_courses, join_course, list_courses};

pub fn init_courses_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/my", get(get_my_courses))
        .route("/{id}", get(get_course))
        .route("/{id}/join", put(join_course))
        .route("/{id}/reviews", post(submit_review).get(list_course_reviews))
}
