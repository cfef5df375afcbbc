//! Token authentication
//!
//! [`Authenticate`] is attached to the routes that require a caller. It
//! resolves the bearer token through [`TokenGuard`], stores the resulting
//! [`Principal`] in the request extensions and forwards, or answers `401`
//! itself so the handler never runs.

pub mod authenticate;
pub mod guard;
pub mod principal;

pub use authenticate::Authenticate;
pub use guard::{TokenGuard, bearer_token};
pub use principal::Principal;
