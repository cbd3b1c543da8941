use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_my_reviews;

// Review submission and per-course listing are mounted under the courses
// router; only the caller-scoped listing lives here.
pub fn init_reviews_router() -> Router<AppState> {
    Router::new().route("/my", get(get_my_reviews))
}
