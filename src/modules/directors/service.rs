use film_core::AppError;
use film_db::Gateway;
use film_models::{Director, NewDirector};
use tracing::instrument;

use crate::modules::ensure_valid_id;

pub const DIRECTOR_NOT_FOUND: &str = "Sutradara tidak ditemukan";

pub struct DirectorService;

impl DirectorService {
    #[instrument(skip(gateway))]
    pub async fn get_directors(gateway: &Gateway) -> Result<Vec<Director>, AppError> {
        Ok(gateway.directors.find_all().await?)
    }

    #[instrument(skip(gateway))]
    pub async fn get_director(gateway: &Gateway, id: &str) -> Result<Director, AppError> {
        ensure_valid_id(gateway.directors.as_ref(), id)?;

        gateway
            .directors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(DIRECTOR_NOT_FOUND))
    }

    #[instrument(skip(gateway))]
    pub async fn create_director(
        gateway: &Gateway,
        draft: NewDirector,
    ) -> Result<Director, AppError> {
        Ok(gateway.directors.insert(draft).await?)
    }

    #[instrument(skip(gateway))]
    pub async fn update_director(
        gateway: &Gateway,
        id: &str,
        draft: NewDirector,
    ) -> Result<Director, AppError> {
        gateway
            .directors
            .update_by_id(id, draft)
            .await?
            .ok_or_else(|| AppError::not_found(DIRECTOR_NOT_FOUND))
    }

    #[instrument(skip(gateway))]
    pub async fn delete_director(gateway: &Gateway, id: &str) -> Result<(), AppError> {
        ensure_valid_id(gateway.directors.as_ref(), id)?;

        if gateway.directors.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(DIRECTOR_NOT_FOUND))
        }
    }
}
