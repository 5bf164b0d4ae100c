use axum::{Json, extract::State, http::StatusCode};
use film_core::AppError;
use film_models::{
    ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role,
};
use tracing::{instrument, warn};

use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

const REGISTER_FIELDS_MESSAGE: &str = "Username dan password (min 6 char) harus diisi";
const LOGIN_FIELDS_MESSAGE: &str = "Username dan password harus diisi";

fn credentials(
    username: Option<String>,
    password: Option<String>,
    message: &str,
) -> Result<(String, String), AppError> {
    match (username, password) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(AppError::validation(message)),
    }
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Missing username or short password", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let (username, password) = credentials(dto.username, dto.password, REGISTER_FIELDS_MESSAGE)?;
    let user = AuthService::register(&state.gateway, &username, &password, Role::User).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registrasi berhasil".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Open to anyone, like `register_user`; every call is logged.
#[utoipa::path(
    post,
    path = "/auth/register-admin",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Admin account created", body = RegisterResponse),
        (status = 400, description = "Missing username or short password", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let (username, password) = credentials(dto.username, dto.password, REGISTER_FIELDS_MESSAGE)?;
    warn!(username = %username, "Unauthenticated admin registration requested");

    let user = AuthService::register(&state.gateway, &username, &password, Role::Admin).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Admin berhasil dibuat".to_string(),
            user_id: user.id,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (username, password) = credentials(dto.username, dto.password, LOGIN_FIELDS_MESSAGE)?;
    let token =
        AuthService::login(&state.gateway, &state.jwt_config, &username, &password).await?;

    Ok(Json(LoginResponse {
        message: "Login berhasil".to_string(),
        token,
    }))
}
