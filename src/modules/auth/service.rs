use film_auth::{SessionUser, issue_token};
use film_config::JwtConfig;
use film_core::{AppError, hash_password, verify_password};
use film_db::{Gateway, StoreError};
use film_models::{NewUser, Role, UserRecord, normalize_username};
use tracing::instrument;

pub struct AuthService;

impl AuthService {
    /// Stores a new account. The username is lowercased first.
    #[instrument(skip(gateway, password))]
    pub async fn register(
        gateway: &Gateway,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<UserRecord, AppError> {
        let password_hash = hash_password(password).await?;

        let user = gateway
            .users
            .insert_user(NewUser {
                username: normalize_username(username),
                password_hash,
                role,
            })
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation => AppError::conflict(match role {
                    Role::Admin => "Username admin sudah ada",
                    Role::User => "Username sudah digunakan",
                }),
                other => AppError::internal(other),
            })?;

        Ok(user)
    }

    /// Returns a signed token. Unknown usernames and wrong passwords fail identically.
    #[instrument(skip(gateway, jwt_config, password))]
    pub async fn login(
        gateway: &Gateway,
        jwt_config: &JwtConfig,
        username: &str,
        password: &str,
    ) -> Result<String, AppError> {
        let user = gateway
            .users
            .find_by_username(&normalize_username(username))
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !verify_password(password, &user.password_hash).await? {
            return Err(AppError::invalid_credentials());
        }

        issue_token(&SessionUser::from(&user), jwt_config)
    }
}
