//! HTTP surface modules (router, handlers, problem responses).

/// Shared constants and header names.
pub mod constants;
/// Problem response helpers and error types.
pub mod errors;
/// Liveness endpoint.
pub mod health;
/// Organization read/write handlers.
pub mod organization;
/// Router construction and server host.
pub mod router;
/// Session handlers.
pub mod user;
