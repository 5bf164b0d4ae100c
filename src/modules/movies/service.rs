use film_core::AppError;
use film_db::Gateway;
use film_models::{Movie, NewMovie};
use tracing::instrument;

use crate::modules::ensure_valid_id;

pub const MOVIE_NOT_FOUND: &str = "Film tidak ditemukan";

pub struct MovieService;

impl MovieService {
    #[instrument(skip(gateway))]
    pub async fn get_movies(gateway: &Gateway) -> Result<Vec<Movie>, AppError> {
        Ok(gateway.movies.find_all().await?)
    }

    #[instrument(skip(gateway))]
    pub async fn get_movie(gateway: &Gateway, id: &str) -> Result<Movie, AppError> {
        ensure_valid_id(gateway.movies.as_ref(), id)?;

        gateway
            .movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(MOVIE_NOT_FOUND))
    }

    #[instrument(skip(gateway))]
    pub async fn create_movie(gateway: &Gateway, draft: NewMovie) -> Result<Movie, AppError> {
        Ok(gateway.movies.insert(draft).await?)
    }

    #[instrument(skip(gateway))]
    pub async fn update_movie(
        gateway: &Gateway,
        id: &str,
        draft: NewMovie,
    ) -> Result<Movie, AppError> {
        gateway
            .movies
            .update_by_id(id, draft)
            .await?
            .ok_or_else(|| AppError::not_found(MOVIE_NOT_FOUND))
    }

    #[instrument(skip(gateway))]
    pub async fn delete_movie(gateway: &Gateway, id: &str) -> Result<(), AppError> {
        ensure_valid_id(gateway.movies.as_ref(), id)?;

        if gateway.movies.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(MOVIE_NOT_FOUND))
        }
    }
}
