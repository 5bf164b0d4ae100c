use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::get_status;

pub fn init_status_router() -> Router<AppState> {
    Router::new().route("/status", get(get_status))
}
