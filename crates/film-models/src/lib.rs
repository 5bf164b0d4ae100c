//! # Film Models
//!
//! Domain models and DTOs for the Film API.
//!
//! # Modules
//!
//! - [`ids`]: Backend-neutral record identifiers
//! - [`movies`]: Movie records and write payloads
//! - [`directors`]: Director records and write payloads
//! - [`users`]: Stored user accounts and roles
//! - [`auth`]: Registration and login DTOs
//!
//! Write payloads (`MovieInput`, `DirectorInput`) are converted into drafts
//! (`NewMovie`, `NewDirector`) only after validation succeeds, so a persistence
//! backend never receives a record with missing or empty fields.

pub mod auth;
pub mod directors;
pub mod ids;
pub mod movies;
pub mod users;

pub use auth::{
    ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    StatusResponse, normalize_username,
};
pub use directors::{Director, DirectorInput, NewDirector};
pub use ids::RecordId;
pub use movies::{Movie, MovieInput, NewMovie};
pub use users::{NewUser, Role, UserRecord};
