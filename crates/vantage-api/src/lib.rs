#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! HTTP surface for organization settings.
//!
//! Layout: `config.rs` (store facade), `store.rs` (in-memory backend),
//! `state.rs` (shared handler state), `http/` (router, handlers, problem
//! responses), `error.rs` (server bootstrap errors).

pub mod config;
pub mod error;
pub mod http;
pub mod state;
pub mod store;

/// Shared DTOs re-exported for server consumers.
pub use vantage_api_models as models;

pub use config::{OrganizationStore, SessionUser, SharedStore};
pub use error::{ApiServerError, ApiServerResult};
pub use http::router::ApiServer;
pub use store::InMemoryOrganizationStore;
