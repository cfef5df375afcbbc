pub mod api;
pub mod cli;
pub mod config;
pub mod controllers;
pub mod database;
pub mod entities;
pub mod error;
pub mod middlewares;
pub mod models;
pub mod responses;
pub mod router;
pub mod server;
pub mod services;
pub mod telemetry;

// Testing utilities (always available for integration tests)
pub mod testing;

// Re-export commonly used types for convenience
pub use error::Error;
pub use middlewares::v1::auth::{Authenticate, Principal, TokenGuard};
