//! Experiment result widgets.
//!
//! # Design
//! - Decide what to show in `srm`; the view only renders that decision.

pub mod srm;
#[cfg(target_arch = "wasm32")]
pub mod view;
