use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use film_models::{
    Director, DirectorInput, ErrorResponse, LoginRequest, LoginResponse, Movie, MovieInput,
    RecordId, RegisterRequest, RegisterResponse, Role, StatusResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::status::controller::get_status,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::register_admin,
        crate::modules::auth::controller::login_user,
        crate::modules::movies::controller::get_movies,
        crate::modules::movies::controller::get_movie,
        crate::modules::movies::controller::create_movie,
        crate::modules::movies::controller::update_movie,
        crate::modules::movies::controller::delete_movie,
        crate::modules::directors::controller::get_directors,
        crate::modules::directors::controller::get_director,
        crate::modules::directors::controller::create_director,
        crate::modules::directors::controller::update_director,
        crate::modules::directors::controller::delete_director,
    ),
    components(
        schemas(
            RecordId,
            Role,
            Movie,
            MovieInput,
            Director,
            DirectorInput,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            StatusResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Status", description = "Liveness probe"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Movies", description = "Movie catalogue"),
        (name = "Directors", description = "Director catalogue")
    ),
    info(
        title = "Film API",
        version = "0.1.0",
        description = "Movies and directors over a pluggable persistence gateway, with bearer token authentication and an admin role gate.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/status",
            "/auth/register",
            "/auth/register-admin",
            "/auth/login",
            "/movies",
            "/movies/{id}",
            "/directors",
            "/directors/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
