use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::{login_user, register_admin, register_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_user))
        .route("/auth/register-admin", post(register_admin))
        .route("/auth/login", post(login_user))
}
