pub mod auth;
pub mod directors;
pub mod movies;
pub mod status;

use film_core::AppError;
use film_db::{Resource, ResourceStore};

/// Rejects identifiers the backend could never resolve, before any lookup.
pub(crate) fn ensure_valid_id<R: Resource>(
    store: &dyn ResourceStore<R>,
    raw: &str,
) -> Result<(), AppError> {
    if store.is_valid_id(raw) {
        Ok(())
    } else {
        Err(AppError::invalid_id())
    }
}
