//! OpenMusic API library.
//!
//! REST service for albums and songs stored in SQLite. Exposed as a library
//! so the integration tests can build the same router as the binary.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod validator;

pub use config::Config;
pub use db::DbPool;
pub use error::{AppError, ErrorKind, INTERNAL_ERROR_MESSAGE};
pub use routes::router;
