use crate::middleware::{Stage, guarded};
use crate::modules::directors::controller::{
    create_director, delete_director, get_director, get_directors, update_director,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use film_models::Role;

pub fn init_directors_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/directors",
            get(get_directors).merge(guarded(post(create_director), &[Stage::Authenticate], state)),
        )
        .route(
            "/directors/{id}",
            get(get_director).merge(guarded(
                put(update_director).delete(delete_director),
                &[Stage::Authenticate, Stage::RequireRole(Role::Admin)],
                state,
            )),
        )
}
