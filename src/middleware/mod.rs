//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token authentication and the [`auth::AuthUser`] extractor
//! - [`role`]: The role gate
//!
//! # Stage Chains
//!
//! A protected route declares an ordered list of [`Stage`]s. Each stage either
//! lets the request continue or short-circuits with an error response:
//!
//! ```ignore
//! use crate::middleware::{Stage, guarded};
//!
//! let admin_only = guarded(
//!     put(update_movie).delete(delete_movie),
//!     &[Stage::Authenticate, Stage::RequireRole(Role::Admin)],
//!     &state,
//! );
//! ```
//!
//! Stages run in the order given. `RequireRole` must come after
//! `Authenticate`; on its own it rejects every request with 403.

pub mod auth;
pub mod role;

use axum::{middleware::from_fn_with_state, routing::MethodRouter};
use film_models::Role;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Verify the bearer token and attach its claims to the request.
    Authenticate,
    /// Continue only when the attached claims carry exactly this role.
    RequireRole(Role),
}

/// Wraps `route` so `stages` run in order before its handlers.
pub fn guarded(
    route: MethodRouter<AppState>,
    stages: &[Stage],
    state: &AppState,
) -> MethodRouter<AppState> {
    // The last layer applied is the first to run.
    stages.iter().rev().fold(route, |route, stage| match *stage {
        Stage::Authenticate => {
            route.route_layer(from_fn_with_state(state.clone(), auth::authenticate))
        }
        Stage::RequireRole(required) => {
            route.route_layer(from_fn_with_state(required, role::require_role))
        }
    })
}
