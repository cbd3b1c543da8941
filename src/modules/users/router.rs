use axum::{Router, routing::put};

use crate::state::AppState;

use super::controller::update_profile;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/profile", put(update_profile))
}
