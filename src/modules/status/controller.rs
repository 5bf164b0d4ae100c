use axum::Json;
use film_models::StatusResponse;

pub const SERVICE_NAME: &str = "film-api";

#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    ),
    tag = "Status"
)]
pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        ok: true,
        service: SERVICE_NAME.to_string(),
    })
}
