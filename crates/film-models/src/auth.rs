use film_core::serde::deserialize_trimmed_string;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::RecordId;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(
        required(message = "Username dan password (min 6 char) harus diisi"),
        length(min = 1, message = "Username dan password (min 6 char) harus diisi")
    )]
    #[schema(value_type = String, example = "budi")]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Username dan password (min 6 char) harus diisi"),
        length(min = 6, message = "Username dan password (min 6 char) harus diisi")
    )]
    #[schema(value_type = String, example = "rahasia123")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(
        required(message = "Username dan password harus diisi"),
        length(min = 1, message = "Username dan password harus diisi")
    )]
    #[schema(value_type = String, example = "budi")]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Username dan password harus diisi"),
        length(min = 1, message = "Username dan password harus diisi")
    )]
    #[schema(value_type = String, example = "rahasia123")]
    pub password: Option<String>,
}

/// Usernames are stored and looked up lowercased.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: RecordId,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub ok: bool,
    pub service: String,
}
