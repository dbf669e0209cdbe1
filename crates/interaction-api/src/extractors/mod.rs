//! Axum extractors for request handling
//!
//! Custom extractors for authentication and validated JSON bodies.

mod auth;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use validated::ValidatedJson;
