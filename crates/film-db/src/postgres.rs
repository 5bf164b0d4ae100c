//! Relational backend on PostgreSQL.
//!
//! Rows use `BIGSERIAL` ids. Any path value is accepted as a potential id;
//! values that do not parse as an integer simply match nothing.

use async_trait::async_trait;
use film_models::{Director, Movie, NewDirector, NewMovie, NewUser, RecordId, Role, UserRecord};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::gateway::{ResourceStore, StoreError, UserStore};

fn parse_row_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn map_unique_violation(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return StoreError::UniqueViolation;
        }
    }
    StoreError::Database(e)
}

#[derive(Debug, FromRow)]
struct MovieRow {
    id: i64,
    title: String,
    director: String,
    year: i32,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: RecordId::Int(row.id),
            title: row.title,
            director: row.director,
            year: row.year,
        }
    }
}

#[derive(Debug, FromRow)]
struct DirectorRow {
    id: i64,
    name: String,
    birth_year: i32,
}

impl From<DirectorRow> for Director {
    fn from(row: DirectorRow) -> Self {
        Director {
            id: RecordId::Int(row.id),
            name: row.name,
            birth_year: row.birth_year,
        }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    role: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row.role.parse::<Role>().map_err(StoreError::InvalidData)?;
        Ok(UserRecord {
            id: RecordId::Int(row.id),
            username: row.username,
            password_hash: row.password,
            role,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PgMovieStore {
    db: PgPool,
}

impl PgMovieStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceStore<Movie> for PgMovieStore {
    fn is_valid_id(&self, _raw: &str) -> bool {
        true
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, director, year FROM movies ORDER BY id ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, raw: &str) -> Result<Option<Movie>, StoreError> {
        let Some(id) = parse_row_id(raw) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, director, year FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Movie::from))
    }

    #[instrument(skip(self))]
    async fn insert(&self, draft: NewMovie) -> Result<Movie, StoreError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"INSERT INTO movies (title, director, year)
               VALUES ($1, $2, $3)
               RETURNING id, title, director, year"#,
        )
        .bind(&draft.title)
        .bind(&draft.director)
        .bind(draft.year)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn update_by_id(&self, raw: &str, draft: NewMovie) -> Result<Option<Movie>, StoreError> {
        let Some(id) = parse_row_id(raw) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, MovieRow>(
            r#"UPDATE movies
               SET title = $1, director = $2, year = $3
               WHERE id = $4
               RETURNING id, title, director, year"#,
        )
        .bind(&draft.title)
        .bind(&draft.director)
        .bind(draft.year)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Movie::from))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, raw: &str) -> Result<bool, StoreError> {
        let Some(id) = parse_row_id(raw) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone)]
pub struct PgDirectorStore {
    db: PgPool,
}

impl PgDirectorStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceStore<Director> for PgDirectorStore {
    fn is_valid_id(&self, _raw: &str) -> bool {
        true
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Director>, StoreError> {
        let rows = sqlx::query_as::<_, DirectorRow>(
            "SELECT id, name, birth_year FROM directors ORDER BY id ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Director::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, raw: &str) -> Result<Option<Director>, StoreError> {
        let Some(id) = parse_row_id(raw) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, DirectorRow>(
            "SELECT id, name, birth_year FROM directors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Director::from))
    }

    #[instrument(skip(self))]
    async fn insert(&self, draft: NewDirector) -> Result<Director, StoreError> {
        let row = sqlx::query_as::<_, DirectorRow>(
            r#"INSERT INTO directors (name, birth_year)
               VALUES ($1, $2)
               RETURNING id, name, birth_year"#,
        )
        .bind(&draft.name)
        .bind(draft.birth_year)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn update_by_id(
        &self,
        raw: &str,
        draft: NewDirector,
    ) -> Result<Option<Director>, StoreError> {
        let Some(id) = parse_row_id(raw) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, DirectorRow>(
            r#"UPDATE directors
               SET name = $1, birth_year = $2
               WHERE id = $3
               RETURNING id, name, birth_year"#,
        )
        .bind(&draft.name)
        .bind(draft.birth_year)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Director::from))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, raw: &str) -> Result<bool, StoreError> {
        let Some(id) = parse_row_id(raw) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self, user), fields(username = %user.username, role = %user.role))]
    async fn insert_user(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"INSERT INTO users (username, password, role)
               VALUES ($1, $2, $3)
               RETURNING id, username, password, role"#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.db)
        .await
        .map_err(map_unique_violation)?;

        row.try_into()
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_id() {
        assert_eq!(parse_row_id("12"), Some(12));
        assert_eq!(parse_row_id("abc"), None);
        assert_eq!(parse_row_id("1.5"), None);
    }

    #[test]
    fn test_user_row_with_unknown_role_is_invalid_data() {
        let row = UserRow {
            id: 1,
            username: "budi".to_string(),
            password: "digest".to_string(),
            role: "superuser".to_string(),
        };
        assert!(matches!(
            UserRecord::try_from(row),
            Err(StoreError::InvalidData(_))
        ));
    }
}
