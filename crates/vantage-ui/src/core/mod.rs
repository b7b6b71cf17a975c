//! Core, DOM-free primitives shared by features.
pub mod store;
