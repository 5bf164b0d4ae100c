use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use film_core::AppError;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed `validator` checks.
///
/// Every rejection, whether from parsing or validation, is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

fn rejection_message(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "Header 'Content-Type: application/json' wajib disertakan",
        JsonRejection::JsonDataError(_) => "Tipe data pada body permintaan tidak valid",
        _ => "Body permintaan bukan JSON yang valid",
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
                AppError::validation(rejection_message(&rejection))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::from_validation(&errors))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use film_core::ErrorKind;
    use film_models::MovieInput;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/movies");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let req = request(
            Some("application/json"),
            r#"{"title":"Parasite","director":"Bong Joon-ho","year":2019}"#,
        );
        let ValidatedJson(input) = ValidatedJson::<MovieInput>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(input.title.as_deref(), Some("Parasite"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_validation_error() {
        let req = request(None, r#"{"title":"Parasite"}"#);
        let err = ValidatedJson::<MovieInput>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let req = request(Some("application/json"), "{not json");
        let err = ValidatedJson::<MovieInput>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_failed_validation_uses_field_message() {
        let req = request(Some("application/json"), r#"{"title":"Parasite"}"#);
        let err = ValidatedJson::<MovieInput>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.error.to_string(), "title, director, year wajib diisi");
    }
}
