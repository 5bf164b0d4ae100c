use std::any::Any;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::directors::router::init_directors_router;
use crate::modules::movies::router::init_movies_router;
use crate::modules::status::router::init_status_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, middleware};
use film_config::CorsConfig;
use film_core::AppError;
use film_models::ErrorResponse;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub const ROUTE_NOT_FOUND: &str = "Rute tidak ditemukan";

/// Answers unknown paths and unsupported methods alike.
pub async fn route_not_found() -> Response {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: ROUTE_NOT_FOUND.to_string(),
        }),
    )
        .into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    AppError::internal_error(format!("Handler panicked: {}", detail)).into_response()
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any() {
        return layer.allow_origin(AnyOrigin);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins).allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route(
            "/api-docs/openapi.json",
            axum::routing::get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(init_status_router())
        .merge(init_auth_router())
        .merge(init_movies_router(&state))
        .merge(init_directors_router(&state))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(state.clone())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.cors_config))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}
