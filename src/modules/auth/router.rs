use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_me, login_user, register_student, register_teacher};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register/student", post(register_student))
        .route("/register/teacher", post(register_teacher))
        .route("/login", post(login_user))
        .route("/me", get(get_me))
}
