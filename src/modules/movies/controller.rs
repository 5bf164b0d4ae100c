use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use film_core::AppError;
use film_models::{ErrorResponse, Movie, MovieInput, NewMovie};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::ensure_valid_id;
use crate::modules::movies::service::MovieService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "All movies", body = Vec<Movie>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = MovieService::get_movies(&state.gateway).await?;
    Ok(Json(movies))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    let movie = MovieService::get_movie(&state.gateway, &id).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieInput,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Missing or empty fields", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Movies"
)]
#[instrument(skip(state, auth_user, input), fields(username = %auth_user.username()))]
pub async fn create_movie(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<MovieInput>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    let draft = NewMovie::try_from(input)?;
    let movie = MovieService::create_movie(&state.gateway, draft).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie ID")
    ),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Movie replaced", body = Movie),
        (status = 400, description = "Malformed ID or missing fields", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid token or not an admin", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Movies"
)]
#[instrument(skip(state, body))]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<ValidatedJson<MovieInput>, AppError>,
) -> Result<Json<Movie>, AppError> {
    // The identifier is checked before the body.
    ensure_valid_id(state.gateway.movies.as_ref(), &id)?;
    let ValidatedJson(input) = body?;

    let draft = NewMovie::try_from(input)?;
    let movie = MovieService::update_movie(&state.gateway, &id, draft).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid token or not an admin", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    MovieService::delete_movie(&state.gateway, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
