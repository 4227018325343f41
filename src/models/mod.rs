//! Data models representing database entities and API bodies.

/// Album model
pub mod album;
/// Response envelope shared by all endpoints
pub mod envelope;
/// Song model
pub mod song;
