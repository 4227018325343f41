//! HTTP middleware components.
//!
//! Middleware wrap route handlers. Here they are used to give every error
//! response, whoever produced it, the same JSON envelope.

/// Error classification and envelope mapping for every response
pub mod response_mapper;
