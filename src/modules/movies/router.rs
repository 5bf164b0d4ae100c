use crate::middleware::{Stage, guarded};
use crate::modules::movies::controller::{
    create_movie, delete_movie, get_movie, get_movies, update_movie,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use film_models::Role;

pub fn init_movies_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(get_movies).merge(guarded(post(create_movie), &[Stage::Authenticate], state)),
        )
        .route(
            "/movies/{id}",
            get(get_movie).merge(guarded(
                put(update_movie).delete(delete_movie),
                &[Stage::Authenticate, Stage::RequireRole(Role::Admin)],
                state,
            )),
        )
}
