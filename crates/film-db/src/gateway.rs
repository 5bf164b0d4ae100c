//! Backend-neutral persistence interface.
//!
//! Handlers talk to storage only through these traits. Each backend decides
//! what a valid identifier looks like, so identifier checks go through
//! [`ResourceStore::is_valid_id`] rather than being hard-coded by callers.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use film_config::StoreBackend;
use film_models::{Director, Movie, NewDirector, NewMovie, NewUser, RecordId, UserRecord};

use crate::document::{DocumentCollection, DocumentUsers, ObjectIdGenerator};
use crate::postgres::{PgDirectorStore, PgMovieStore, PgUserStore};
use crate::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,

    #[error("invalid stored value: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// A record type with a write draft that omits the identifier.
pub trait Resource: Clone + Send + Sync + 'static {
    type Draft: Clone + Send + Sync + 'static;

    fn id(&self) -> &RecordId;

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
}

impl Resource for Movie {
    type Draft = NewMovie;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: NewMovie) -> Self {
        draft.into_movie(id)
    }
}

impl Resource for Director {
    type Draft = NewDirector;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: NewDirector) -> Self {
        draft.into_director(id)
    }
}

/// CRUD access to one resource collection.
///
/// `raw` identifiers come straight from the request path. Lookups with an
/// identifier the backend cannot address return `Ok(None)` / `Ok(false)`.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// Whether `raw` could address a record in this backend.
    fn is_valid_id(&self, raw: &str) -> bool;

    async fn find_all(&self) -> Result<Vec<R>, StoreError>;

    async fn find_by_id(&self, raw: &str) -> Result<Option<R>, StoreError>;

    async fn insert(&self, draft: R::Draft) -> Result<R, StoreError>;

    /// Replaces every field of the record; `None` when nothing matched.
    async fn update_by_id(&self, raw: &str, draft: R::Draft) -> Result<Option<R>, StoreError>;

    /// `false` when nothing was removed.
    async fn delete_by_id(&self, raw: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`StoreError::UniqueViolation`] when the username is taken.
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// The stores for every resource, sharing one backend.
#[derive(Clone)]
pub struct Gateway {
    backend: StoreBackend,
    pub movies: Arc<dyn ResourceStore<Movie>>,
    pub directors: Arc<dyn ResourceStore<Director>>,
    pub users: Arc<dyn UserStore>,
}

impl Gateway {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            backend: StoreBackend::Postgres,
            movies: Arc::new(PgMovieStore::new(pool.clone())),
            directors: Arc::new(PgDirectorStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool)),
        }
    }

    /// Empty in-process document collections.
    pub fn document() -> Self {
        let ids = Arc::new(ObjectIdGenerator::new());
        Self {
            backend: StoreBackend::Document,
            movies: Arc::new(DocumentCollection::<Movie>::new(ids.clone())),
            directors: Arc::new(
                DocumentCollection::<Director>::new(ids.clone())
                    .sorted_by(|a, b| a.name.cmp(&b.name)),
            ),
            users: Arc::new(DocumentUsers::new(ids)),
        }
    }

    pub fn backend(&self) -> StoreBackend {
        self.backend
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
