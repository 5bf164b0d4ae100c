use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use film_core::AppError;
use film_models::{ErrorResponse, Director, DirectorInput, NewDirector};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::ensure_valid_id;
use crate::modules::directors::service::DirectorService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/directors",
    responses(
        (status = 200, description = "All directors", body = Vec<Director>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Directors"
)]
#[instrument(skip(state))]
pub async fn get_directors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Director>>, AppError> {
    let directors = DirectorService::get_directors(&state.gateway).await?;
    Ok(Json(directors))
}

#[utoipa::path(
    get,
    path = "/directors/{id}",
    params(
        ("id" = String, Path, description = "Director ID")
    ),
    responses(
        (status = 200, description = "Director details", body = Director),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Director not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Directors"
)]
#[instrument(skip(state))]
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Director>, AppError> {
    let director = DirectorService::get_director(&state.gateway, &id).await?;
    Ok(Json(director))
}

#[utoipa::path(
    post,
    path = "/directors",
    request_body = DirectorInput,
    responses(
        (status = 201, description = "Director created", body = Director),
        (status = 400, description = "Missing or empty fields", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Directors"
)]
#[instrument(skip(state, auth_user, input), fields(username = %auth_user.username()))]
pub async fn create_director(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(input): ValidatedJson<DirectorInput>,
) -> Result<(StatusCode, Json<Director>), AppError> {
    let draft = NewDirector::try_from(input)?;
    let director = DirectorService::create_director(&state.gateway, draft).await?;
    Ok((StatusCode::CREATED, Json(director)))
}

#[utoipa::path(
    put,
    path = "/directors/{id}",
    params(
        ("id" = String, Path, description = "Director ID")
    ),
    request_body = DirectorInput,
    responses(
        (status = 200, description = "Director replaced", body = Director),
        (status = 400, description = "Malformed ID or missing fields", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid token or not an admin", body = ErrorResponse),
        (status = 404, description = "Director not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Directors"
)]
#[instrument(skip(state, body))]
pub async fn update_director(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<ValidatedJson<DirectorInput>, AppError>,
) -> Result<Json<Director>, AppError> {
    // The identifier is checked before the body.
    ensure_valid_id(state.gateway.directors.as_ref(), &id)?;
    let ValidatedJson(input) = body?;

    let draft = NewDirector::try_from(input)?;
    let director = DirectorService::update_director(&state.gateway, &id, draft).await?;
    Ok(Json(director))
}

#[utoipa::path(
    delete,
    path = "/directors/{id}",
    params(
        ("id" = String, Path, description = "Director ID")
    ),
    responses(
        (status = 204, description = "Director deleted"),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid token or not an admin", body = ErrorResponse),
        (status = 404, description = "Director not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Directors"
)]
#[instrument(skip(state))]
pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    DirectorService::delete_director(&state.gateway, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
