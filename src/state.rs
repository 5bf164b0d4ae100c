use film_config::{CorsConfig, JwtConfig};
use film_db::Gateway;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gateway: Gateway,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}
