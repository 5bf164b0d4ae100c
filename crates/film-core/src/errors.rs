//! Application error type and its HTTP mapping.
//!
//! Every failure that reaches a handler boundary is an [`AppError`]. Each
//! constructor corresponds to one entry of the error taxonomy and fixes the
//! status code, so call sites only choose the kind and the message.
//!
//! Server-side failures (5xx) never leak their cause: the response carries a
//! generic message while the underlying error is logged.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::ValidationErrors;

/// Message returned to clients for every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan pada server";

/// Classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    InvalidId,
    MissingAuth,
    InvalidToken,
    Forbidden,
    InvalidCredentials,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation | ErrorKind::InvalidId => StatusCode::BAD_REQUEST,
            ErrorKind::MissingAuth | ErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
            // An unverifiable token is answered with 403, not 401.
            ErrorKind::InvalidToken | ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            status: kind.status(),
            error: err.into(),
        }
    }

    fn message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, anyhow::anyhow!(message.into()))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::Validation, message)
    }

    /// Collapses field errors into one message, ordered by field name.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut messages: Vec<String> = Vec::new();
        for (field, field_errors) in fields {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} tidak valid", field));
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
        }

        Self::validation(messages.join(", "))
    }

    pub fn invalid_id() -> Self {
        Self::message(ErrorKind::InvalidId, "Format ID tidak valid")
    }

    pub fn missing_auth() -> Self {
        Self::message(
            ErrorKind::MissingAuth,
            "Header otorisasi tidak valid atau token tidak ditemukan",
        )
    }

    pub fn invalid_token() -> Self {
        Self::message(ErrorKind::InvalidToken, "Token tidak valid")
    }

    pub fn forbidden() -> Self {
        Self::message(ErrorKind::Forbidden, "Akses Dilarang: Peran tidak memadai")
    }

    pub fn invalid_credentials() -> Self {
        Self::message(ErrorKind::InvalidCredentials, "Kredensial tidak valid")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::Conflict, message)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::Internal, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.status.is_server_error() {
            tracing::error!(error = ?self.error, "Unhandled internal error");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.error.to_string()
        };

        (self.status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
