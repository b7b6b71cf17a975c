//! HTTP client helpers and their error type.

pub mod error;

#[cfg(target_arch = "wasm32")]
pub mod api;
