//! General settings feature wiring.
//!
//! # Design
//! - Mirror the organization's settings into an editable draft and diff it
//!   structurally; both steps are pure functions in `logic`.
//! - Keep the editing lifecycle (load, edit, save, stale completions) in one
//!   session type so the view only forwards events.
//! - Restrict API calls to `api`; what happens after a write lands is in
//!   `reconcile` and runs natively.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod reconcile;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
